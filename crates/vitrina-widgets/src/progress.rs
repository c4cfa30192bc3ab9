//! Progress indicator widget (linear and circular variants).

use vitrina_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, Constraints, Event, Rect, Size, TypeId, Widget,
};

use serde::{Deserialize, Serialize};
use std::any::Any;

/// Indicator shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProgressVariant {
    /// Horizontal bar
    #[default]
    Linear,
    /// Ring
    Circular,
}

/// Progress indicator.
///
/// Determinate progress maps a value in [0, 100] to the filled fraction of
/// the track. Indeterminate mode has no value; the rendering layer animates
/// the track itself (animation timing is outside this crate's concern).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressIndicator {
    /// Shape variant
    variant: ProgressVariant,
    /// Progress value in [0, 100]
    value: f32,
    /// Whether the indicator is indeterminate
    indeterminate: bool,
    /// Track color
    track_color: Color,
    /// Fill color
    fill_color: Color,
    /// Bar thickness / ring stroke width
    thickness: f32,
    /// Circular diameter
    diameter: f32,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Default for ProgressIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressIndicator {
    /// Create a linear determinate indicator at 0%.
    #[must_use]
    pub fn new() -> Self {
        Self {
            variant: ProgressVariant::Linear,
            value: 0.0,
            indeterminate: false,
            track_color: Color::new(0.1, 0.46, 0.82, 0.24),
            fill_color: Color::new(0.1, 0.46, 0.82, 1.0),
            thickness: 4.0,
            diameter: 32.0,
            accessible_name_value: None,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }

    /// Set the variant.
    #[must_use]
    pub const fn variant(mut self, variant: ProgressVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the progress value, clamped to [0, 100].
    #[must_use]
    pub fn value(mut self, value: f32) -> Self {
        self.value = value.clamp(0.0, 100.0);
        self
    }

    /// Switch to indeterminate mode.
    #[must_use]
    pub const fn indeterminate(mut self, indeterminate: bool) -> Self {
        self.indeterminate = indeterminate;
        self
    }

    /// Set bar thickness / ring stroke width.
    #[must_use]
    pub fn thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness.max(1.0);
        self
    }

    /// Set the accessible name.
    #[must_use]
    pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Current value; `None` in indeterminate mode.
    #[must_use]
    pub fn current_value(&self) -> Option<f32> {
        if self.indeterminate {
            None
        } else {
            Some(self.value)
        }
    }

    /// Set the value in place, clamped. Ignored in indeterminate mode.
    pub fn set_value(&mut self, value: f32) {
        if !self.indeterminate {
            self.value = value.clamp(0.0, 100.0);
        }
    }

    /// Filled fraction in [0, 1].
    #[must_use]
    pub fn fraction(&self) -> f32 {
        self.value / 100.0
    }
}

impl Widget for ProgressIndicator {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let preferred = match self.variant {
            ProgressVariant::Linear => Size::new(240.0, self.thickness),
            ProgressVariant::Circular => Size::new(self.diameter, self.diameter),
        };
        constraints.constrain(preferred)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        match self.variant {
            ProgressVariant::Linear => {
                let track = Rect::new(
                    self.bounds.x,
                    self.bounds.center().y - self.thickness / 2.0,
                    self.bounds.width,
                    self.thickness,
                );
                canvas.fill_rect(track, self.track_color);
                if !self.indeterminate {
                    canvas.fill_rect(
                        Rect::new(track.x, track.y, track.width * self.fraction(), track.height),
                        self.fill_color,
                    );
                }
            }
            ProgressVariant::Circular => {
                let center = self.bounds.center();
                let radius = (self.diameter - self.thickness) / 2.0;
                canvas.stroke_circle(center, radius, self.track_color, self.thickness);
                if !self.indeterminate && self.value > 0.0 {
                    canvas.stroke_circle(center, radius, self.fill_color, self.thickness);
                }
            }
        }
    }

    fn event(&mut self, _event: &Event) -> Option<Box<dyn Any + Send>> {
        None
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::ProgressBar
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrina_core::RecordingCanvas;

    #[test]
    fn test_value_clamped() {
        assert_eq!(
            ProgressIndicator::new().value(150.0).current_value(),
            Some(100.0)
        );
        assert_eq!(
            ProgressIndicator::new().value(-10.0).current_value(),
            Some(0.0)
        );
    }

    #[test]
    fn test_indeterminate_has_no_value() {
        let progress = ProgressIndicator::new().value(50.0).indeterminate(true);
        assert!(progress.current_value().is_none());
    }

    #[test]
    fn test_set_value_ignored_when_indeterminate() {
        let mut progress = ProgressIndicator::new().indeterminate(true);
        progress.set_value(75.0);
        assert!(progress.current_value().is_none());
    }

    #[test]
    fn test_fraction() {
        assert_eq!(ProgressIndicator::new().value(25.0).fraction(), 0.25);
    }

    #[test]
    fn test_linear_paint_fills_fraction() {
        let mut progress = ProgressIndicator::new().value(50.0);
        progress.layout(Rect::new(0.0, 0.0, 200.0, 4.0));
        let mut canvas = RecordingCanvas::new();
        progress.paint(&mut canvas);
        // Track plus fill
        assert_eq!(canvas.command_count(), 2);
        if let vitrina_core::DrawCommand::Rect { bounds, .. } = &canvas.commands()[1] {
            assert_eq!(bounds.width, 100.0);
        } else {
            panic!("expected fill rect");
        }
    }

    #[test]
    fn test_indeterminate_paint_has_no_fill() {
        let mut progress = ProgressIndicator::new().indeterminate(true);
        progress.layout(Rect::new(0.0, 0.0, 200.0, 4.0));
        let mut canvas = RecordingCanvas::new();
        progress.paint(&mut canvas);
        assert_eq!(canvas.command_count(), 1);
    }

    #[test]
    fn test_circular_measure() {
        let progress = ProgressIndicator::new().variant(ProgressVariant::Circular);
        let size = progress.measure(Constraints::unbounded());
        assert_eq!(size.width, size.height);
    }

    #[test]
    fn test_not_interactive() {
        let progress = ProgressIndicator::new();
        assert!(!progress.is_interactive());
        assert_eq!(progress.accessible_role(), AccessibleRole::ProgressBar);
    }
}
