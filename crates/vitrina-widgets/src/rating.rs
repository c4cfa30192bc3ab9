//! Star rating widget.

use vitrina_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, Constraints, Event, Key, MouseButton, Point, Rect, Size, TextStyle, TypeId,
    Widget,
};

use serde::{Deserialize, Serialize};
use std::any::Any;

/// How a single star renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarFill {
    /// Fully filled
    Full,
    /// Left half filled
    Half,
    /// Outline only
    Empty,
}

/// Message emitted when the committed rating changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingChanged {
    /// The new rating
    pub value: f64,
}

/// Star rating widget.
///
/// Hover previews a whole-star value; clicking commits the preview. Stored
/// values may be fractional, and a fraction of at least one half renders the
/// boundary star half-filled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    /// Committed value in [0, max]
    value: f64,
    /// Number of stars
    max: usize,
    /// Whether interaction is disabled
    readonly: bool,
    /// Star edge length
    star_size: f32,
    /// Filled color
    fill_color: Color,
    /// Empty color
    empty_color: Color,
    /// Hover preview color
    hover_color: Color,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Test ID
    test_id_value: Option<String>,
    /// Hover preview value, whole stars
    #[serde(skip)]
    hover_value: Option<usize>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Default for Rating {
    fn default() -> Self {
        Self::new()
    }
}

impl Rating {
    /// Create a five-star rating at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: 0.0,
            max: 5,
            readonly: false,
            star_size: 24.0,
            fill_color: Color::new(1.0, 0.79, 0.16, 1.0),
            empty_color: Color::new(0.88, 0.88, 0.88, 1.0),
            hover_color: Color::new(1.0, 0.63, 0.0, 1.0),
            accessible_name_value: None,
            test_id_value: None,
            hover_value: None,
            bounds: Rect::default(),
        }
    }

    /// Set the committed value, clamped to [0, max].
    #[must_use]
    pub fn value(mut self, value: f64) -> Self {
        self.value = value.clamp(0.0, self.max as f64);
        self
    }

    /// Set the number of stars (minimum 1).
    #[must_use]
    pub fn max(mut self, max: usize) -> Self {
        self.max = max.max(1);
        self.value = self.value.clamp(0.0, self.max as f64);
        self
    }

    /// Make the rating display-only.
    #[must_use]
    pub const fn readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
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

    /// The committed value.
    #[must_use]
    pub const fn current_value(&self) -> f64 {
        self.value
    }

    /// The value the stars currently display (hover preview wins).
    #[must_use]
    pub fn display_value(&self) -> f64 {
        self.hover_value.map_or(self.value, |v| v as f64)
    }

    /// Fill of the star at `index` for the displayed value.
    #[must_use]
    pub fn star_fill(&self, index: usize) -> StarFill {
        let value = self.display_value();
        let whole = value.floor();
        if (index as f64) < whole {
            StarFill::Full
        } else if index as f64 == whole && value - whole >= 0.5 {
            StarFill::Half
        } else {
            StarFill::Empty
        }
    }

    /// Whole-star value under an x coordinate, clamped to [1, max].
    fn value_at(&self, x: f32) -> usize {
        if self.bounds.width <= 0.0 {
            return 1;
        }
        let star_width = self.bounds.width / self.max as f32;
        let hovered = ((x - self.bounds.x) / star_width).ceil() as isize;
        hovered.clamp(1, self.max as isize) as usize
    }

    /// Commit a value. No-op when readonly or unchanged.
    pub fn set_value(&mut self, value: f64) -> Option<RatingChanged> {
        if self.readonly {
            return None;
        }
        let clamped = value.clamp(0.0, self.max as f64);
        if (clamped - self.value).abs() < f64::EPSILON {
            return None;
        }
        self.value = clamped;
        Some(RatingChanged { value: clamped })
    }
}

impl Widget for Rating {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(
            self.max as f32 * self.star_size,
            self.star_size,
        ))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let star_width = self.bounds.width / self.max as f32;
        let color = if self.hover_value.is_some() {
            self.hover_color
        } else {
            self.fill_color
        };
        let glyph_style = |c: Color| TextStyle {
            size: self.star_size,
            color: c,
            ..TextStyle::default()
        };

        for index in 0..self.max {
            let center = Point::new(
                self.bounds.x + (index as f32 + 0.5) * star_width,
                self.bounds.center().y,
            );
            let (glyph, glyph_color) = match self.star_fill(index) {
                StarFill::Full => ("\u{2605}", color),
                // Half stars draw the filled glyph in the fill color over the
                // outline; a real renderer clips it to the left half.
                StarFill::Half => ("\u{2BEA}", color),
                StarFill::Empty => ("\u{2606}", self.empty_color),
            };
            canvas.draw_text(glyph, center, &glyph_style(glyph_color));
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if self.readonly {
            return None;
        }
        match event {
            Event::MouseMove { position } if self.bounds.contains_point(position) => {
                self.hover_value = Some(self.value_at(position.x));
                None
            }
            Event::MouseLeave => {
                self.hover_value = None;
                None
            }
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } if self.bounds.contains_point(position) => {
                let picked = self.value_at(position.x);
                self.set_value(picked as f64)
                    .map(|msg| Box::new(msg) as Box<dyn Any + Send>)
            }
            Event::KeyDown { key } => {
                let delta = match key {
                    Key::ArrowRight | Key::ArrowUp => 1.0,
                    Key::ArrowLeft | Key::ArrowDown => -1.0,
                    _ => return None,
                };
                self.set_value(self.value + delta)
                    .map(|msg| Box::new(msg) as Box<dyn Any + Send>)
            }
            _ => None,
        }
    }

    fn is_interactive(&self) -> bool {
        !self.readonly
    }

    fn is_focusable(&self) -> bool {
        !self.readonly
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
