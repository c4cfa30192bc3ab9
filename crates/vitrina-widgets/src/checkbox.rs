//! Checkbox widget with tri-state support.

use vitrina_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, Constraints, Event, Key, MouseButton, Point, Rect, Size, TextStyle, TypeId,
    Widget,
};

use serde::{Deserialize, Serialize};
use std::any::Any;

/// Checkbox state.
///
/// `Indeterminate` is the summary state used by "select all" controls when
/// only part of a collection is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CheckState {
    /// Not checked
    #[default]
    Unchecked,
    /// Checked
    Checked,
    /// Partially checked
    Indeterminate,
}

impl CheckState {
    /// Toggle the state. Indeterminate resolves to unchecked.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Unchecked => Self::Checked,
            Self::Checked | Self::Indeterminate => Self::Unchecked,
        }
    }

    /// Whether this is the checked state.
    #[must_use]
    pub const fn is_checked(self) -> bool {
        matches!(self, Self::Checked)
    }

    /// Whether this is the indeterminate state.
    #[must_use]
    pub const fn is_indeterminate(self) -> bool {
        matches!(self, Self::Indeterminate)
    }
}

/// Message emitted when the checkbox state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckboxChanged {
    /// The new state
    pub state: CheckState,
}

/// Checkbox widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Checkbox {
    /// Current state
    state: CheckState,
    /// Whether disabled
    disabled: bool,
    /// Label text
    label: String,
    /// Box side length
    box_size: f32,
    /// Gap between box and label
    spacing: f32,
    /// Unchecked border color
    border_color: Color,
    /// Checked fill color
    checked_color: Color,
    /// Label color
    label_color: Color,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Default for Checkbox {
    fn default() -> Self {
        Self::new()
    }
}

impl Checkbox {
    /// Create a new unchecked checkbox.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: CheckState::Unchecked,
            disabled: false,
            label: String::new(),
            box_size: 18.0,
            spacing: 8.0,
            border_color: Color::new(0.0, 0.0, 0.0, 0.54),
            checked_color: Color::new(0.1, 0.46, 0.82, 1.0),
            label_color: Color::new(0.0, 0.0, 0.0, 0.87),
            accessible_name_value: None,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }

    /// Set the checked state.
    #[must_use]
    pub const fn checked(mut self, checked: bool) -> Self {
        self.state = if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        };
        self
    }

    /// Set the indeterminate state.
    #[must_use]
    pub const fn indeterminate(mut self) -> Self {
        self.state = CheckState::Indeterminate;
        self
    }

    /// Set the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Disable the checkbox.
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

    /// Get the current state.
    #[must_use]
    pub const fn state(&self) -> CheckState {
        self.state
    }

    /// Toggle and return the change notification. No-op when disabled.
    pub fn toggle(&mut self) -> Option<CheckboxChanged> {
        if self.disabled {
            return None;
        }
        self.state = self.state.toggled();
        Some(CheckboxChanged { state: self.state })
    }
}

impl Widget for Checkbox {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let label_width = self.label.chars().count() as f32 * 8.0;
        let width = if self.label.is_empty() {
            self.box_size
        } else {
            self.box_size + self.spacing + label_width
        };
        constraints.constrain(Size::new(width, self.box_size.max(24.0)))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let box_rect = Rect::new(
            self.bounds.x,
            self.bounds.center().y - self.box_size / 2.0,
            self.box_size,
            self.box_size,
        );
        let color = if self.disabled {
            self.border_color.with_alpha(0.38)
        } else {
            self.checked_color
        };
        match self.state {
            CheckState::Unchecked => canvas.stroke_rect(box_rect, self.border_color, 2.0),
            CheckState::Checked => {
                canvas.fill_rect(box_rect, color);
                // Check mark
                let c = box_rect.center();
                canvas.draw_path(
                    &[
                        Point::new(c.x - 4.0, c.y),
                        Point::new(c.x - 1.0, c.y + 3.0),
                        Point::new(c.x + 4.0, c.y - 3.0),
                    ],
                    Color::WHITE,
                    2.0,
                );
            }
            CheckState::Indeterminate => {
                canvas.fill_rect(box_rect, color);
                let c = box_rect.center();
                canvas.draw_line(
                    Point::new(c.x - 5.0, c.y),
                    Point::new(c.x + 5.0, c.y),
                    Color::WHITE,
                    2.0,
                );
            }
        }

        if !self.label.is_empty() {
            let style = TextStyle {
                size: 14.0,
                color: if self.disabled {
                    self.label_color.with_alpha(0.38)
                } else {
                    self.label_color
                },
                ..TextStyle::default()
            };
            canvas.draw_text(
                &self.label,
                Point::new(
                    box_rect.x + self.box_size + self.spacing,
                    self.bounds.center().y,
                ),
                &style,
            );
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } if self.bounds.contains_point(position) => {
                self.toggle().map(|msg| Box::new(msg) as Box<dyn Any + Send>)
            }
            Event::KeyDown {
                key: Key::Space | Key::Enter,
            } => self.toggle().map(|msg| Box::new(msg) as Box<dyn Any + Send>),
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
        AccessibleRole::Checkbox
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }
}
