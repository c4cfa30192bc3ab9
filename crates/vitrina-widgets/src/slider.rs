//! Slider widget for numeric input along a track.

use vitrina_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, Constraints, Event, Key, MouseButton, Point, Rect, Size, TypeId, Widget,
};

use serde::{Deserialize, Serialize};
use std::any::Any;

/// Message emitted when the slider value changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderChanged {
    /// The new value
    pub value: f64,
}

/// Slider widget with min/max bounds and step quantization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slider {
    /// Minimum value
    min: f64,
    /// Maximum value
    max: f64,
    /// Step increment
    step: f64,
    /// Current value
    value: f64,
    /// Whether disabled
    disabled: bool,
    /// Track color
    track_color: Color,
    /// Filled track / thumb color
    active_color: Color,
    /// Thumb radius
    thumb_radius: f32,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
    /// Whether a drag is in progress
    #[serde(skip)]
    dragging: bool,
}

impl Default for Slider {
    fn default() -> Self {
        Self::new()
    }
}

impl Slider {
    /// Create a slider over [0, 100] with step 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            value: 0.0,
            disabled: false,
            track_color: Color::new(0.0, 0.0, 0.0, 0.26),
            active_color: Color::new(0.1, 0.46, 0.82, 1.0),
            thumb_radius: 8.0,
            accessible_name_value: None,
            test_id_value: None,
            bounds: Rect::default(),
            dragging: false,
        }
    }

    /// Set the range. A max below min is swapped.
    #[must_use]
    pub fn range(mut self, min: f64, max: f64) -> Self {
        if min <= max {
            self.min = min;
            self.max = max;
        } else {
            self.min = max;
            self.max = min;
        }
        self.value = self.quantize(self.value);
        self
    }

    /// Set the step increment (minimum a small positive epsilon).
    #[must_use]
    pub fn step(mut self, step: f64) -> Self {
        self.step = if step > 0.0 { step } else { 1.0 };
        self.value = self.quantize(self.value);
        self
    }

    /// Set the current value, quantized and clamped.
    #[must_use]
    pub fn value(mut self, value: f64) -> Self {
        self.value = self.quantize(value);
        self
    }

    /// Disable the slider.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
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

    /// Get the current value.
    #[must_use]
    pub const fn current_value(&self) -> f64 {
        self.value
    }

    /// Fraction of the range the current value covers, in [0, 1].
    #[must_use]
    pub fn percentage(&self) -> f64 {
        if self.max <= self.min {
            return 0.0;
        }
        (self.value - self.min) / (self.max - self.min)
    }

    /// Map a fraction of the track back to a raw value.
    fn value_from_percentage(&self, percentage: f64) -> f64 {
        self.min + percentage.clamp(0.0, 1.0) * (self.max - self.min)
    }

    /// Snap a raw value to the nearest step and clamp to the range.
    fn quantize(&self, raw: f64) -> f64 {
        let steps = ((raw - self.min) / self.step).round();
        (steps * self.step + self.min).clamp(self.min, self.max)
    }

    /// Update the value from an x coordinate. Returns a change notification
    /// when the quantized value moved.
    fn set_from_x(&mut self, x: f32) -> Option<SliderChanged> {
        let track = self.track_rect();
        if track.width <= 0.0 {
            return None;
        }
        let clamped = x.clamp(track.x, track.x + track.width);
        let percentage = f64::from((clamped - track.x) / track.width);
        let new_value = self.quantize(self.value_from_percentage(percentage));
        if (new_value - self.value).abs() < f64::EPSILON {
            return None;
        }
        self.value = new_value;
        Some(SliderChanged { value: new_value })
    }

    /// Nudge the value by one step. Returns a notification when it moved.
    fn nudge(&mut self, direction: f64) -> Option<SliderChanged> {
        let new_value = self.quantize(self.value + direction * self.step);
        if (new_value - self.value).abs() < f64::EPSILON {
            return None;
        }
        self.value = new_value;
        Some(SliderChanged { value: new_value })
    }

    fn track_rect(&self) -> Rect {
        let inset = self.thumb_radius;
        Rect::new(
            self.bounds.x + inset,
            self.bounds.center().y - 2.0,
            (self.bounds.width - 2.0 * inset).max(0.0),
            4.0,
        )
    }
}

impl Widget for Slider {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(200.0, 2.0 * self.thumb_radius + 8.0))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let track = self.track_rect();
        let active = if self.disabled {
            self.active_color.with_alpha(0.38)
        } else {
            self.active_color
        };
        canvas.fill_rect(track, self.track_color);

        let filled_width = track.width * self.percentage() as f32;
        canvas.fill_rect(
            Rect::new(track.x, track.y, filled_width, track.height),
            active,
        );
        canvas.fill_circle(
            Point::new(track.x + filled_width, self.bounds.center().y),
            self.thumb_radius,
            active,
        );
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if self.disabled {
            return None;
        }
        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } if self.bounds.contains_point(position) => {
                self.dragging = true;
                self.set_from_x(position.x)
                    .map(|msg| Box::new(msg) as Box<dyn Any + Send>)
            }
            Event::MouseMove { position } if self.dragging => self
                .set_from_x(position.x)
                .map(|msg| Box::new(msg) as Box<dyn Any + Send>),
            Event::MouseUp {
                button: MouseButton::Left,
                ..
            } => {
                self.dragging = false;
                None
            }
            Event::KeyDown { key } => {
                let direction = match key {
                    Key::ArrowRight | Key::ArrowUp => 1.0,
                    Key::ArrowLeft | Key::ArrowDown => -1.0,
                    _ => return None,
                };
                self.nudge(direction)
                    .map(|msg| Box::new(msg) as Box<dyn Any + Send>)
            }
            _ => None,
        }
    }

    fn is_interactive(&self) -> bool {
        !self.disabled
    }

    fn is_focusable(&self) -> bool {
        !self.disabled
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Slider
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }
}
