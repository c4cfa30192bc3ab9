//! Button widget.

use vitrina_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, Constraints, Event, Key, MouseButton, Point, Rect, Size, TextStyle, TypeId,
    Widget,
};

use serde::{Deserialize, Serialize};
use std::any::Any;

/// Visual variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ButtonVariant {
    /// Solid background
    #[default]
    Filled,
    /// Border only
    Outlined,
    /// No chrome
    Text,
}

/// Message emitted on activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonClicked;

/// Button widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Button {
    /// Button label
    label: String,
    /// Visual variant
    variant: ButtonVariant,
    /// Whether disabled
    disabled: bool,
    /// Base color
    color: Color,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Test ID
    test_id_value: Option<String>,
    /// Whether the pointer is over the button
    #[serde(skip)]
    hovered: bool,
    /// Whether a press is in progress
    #[serde(skip)]
    pressed: bool,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Default for Button {
    fn default() -> Self {
        Self::new("")
    }
}

impl Button {
    /// Create a filled button.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::Filled,
            disabled: false,
            color: Color::new(0.1, 0.46, 0.82, 1.0),
            accessible_name_value: None,
            test_id_value: None,
            hovered: false,
            pressed: false,
            bounds: Rect::default(),
        }
    }

    /// Set the variant.
    #[must_use]
    pub const fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the base color.
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Disable the button.
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

    /// The label text.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the pointer is currently over the button.
    #[must_use]
    pub const fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether a press is in progress.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.pressed
    }

    fn background(&self) -> Option<Color> {
        match self.variant {
            ButtonVariant::Filled => {
                if self.disabled {
                    Some(Color::new(0.0, 0.0, 0.0, 0.12))
                } else if self.pressed {
                    Some(self.color.with_alpha(0.76))
                } else if self.hovered {
                    Some(self.color.with_alpha(0.88))
                } else {
                    Some(self.color)
                }
            }
            ButtonVariant::Outlined | ButtonVariant::Text => {
                (self.hovered && !self.disabled).then(|| self.color.with_alpha(0.08))
            }
        }
    }
}

impl Widget for Button {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let label_width = self.label.chars().count() as f32 * 8.0;
        constraints.constrain(Size::new(label_width + 32.0, 36.0))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if let Some(background) = self.background() {
            canvas.fill_rect(self.bounds, background);
        }
        if self.variant == ButtonVariant::Outlined {
            let border = if self.disabled {
                Color::new(0.0, 0.0, 0.0, 0.12)
            } else {
                self.color
            };
            canvas.stroke_rect(self.bounds, border, 1.0);
        }

        let text_color = if self.disabled {
            Color::new(0.0, 0.0, 0.0, 0.26)
        } else if self.variant == ButtonVariant::Filled {
            Color::WHITE
        } else {
            self.color
        };
        canvas.draw_text(
            &self.label,
            self.bounds.center(),
            &TextStyle {
                size: 14.0,
                color: text_color,
                ..TextStyle::default()
            },
        );
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if self.disabled {
            return None;
        }
        match event {
            Event::MouseEnter => {
                self.hovered = true;
                None
            }
            Event::MouseLeave => {
                self.hovered = false;
                self.pressed = false;
                None
            }
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } if self.bounds.contains_point(position) => {
                self.pressed = true;
                None
            }
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            } => {
                let was_pressed = self.pressed;
                self.pressed = false;
                (was_pressed && self.bounds.contains_point(position))
                    .then(|| Box::new(ButtonClicked) as Box<dyn Any + Send>)
            }
            Event::KeyDown {
                key: Key::Enter | Key::Space,
            } => Some(Box::new(ButtonClicked)),
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
        self.accessible_name_value
            .as_deref()
            .or(if self.label.is_empty() {
                None
            } else {
                Some(&self.label)
            })
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Button
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }
}
