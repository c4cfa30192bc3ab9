//! Chip widget.

use vitrina_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, Constraints, Event, MouseButton, Point, Rect, Size, TextStyle, TypeId, Widget,
};

use serde::{Deserialize, Serialize};
use std::any::Any;

/// Width reserved for the close affordance.
const CLOSE_ZONE_WIDTH: f32 = 24.0;

/// Message emitted when the chip body is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipClicked {
    /// Whether the chip is now selected
    pub selected: bool,
}

/// Message emitted when the close affordance is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipClosed;

/// Chip widget with an optional close affordance.
///
/// Clicking the body toggles selection; clicking the close zone of a
/// removable chip asks the owner to remove it instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chip {
    /// Label text
    label: String,
    /// Whether a close affordance is shown
    removable: bool,
    /// Whether the chip is selected
    selected: bool,
    /// Whether disabled
    disabled: bool,
    /// Base color
    color: Color,
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

impl Default for Chip {
    fn default() -> Self {
        Self::new("")
    }
}

impl Chip {
    /// Create a chip.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            removable: false,
            selected: false,
            disabled: false,
            color: Color::new(0.9, 0.9, 0.9, 1.0),
            label_color: Color::new(0.0, 0.0, 0.0, 0.87),
            accessible_name_value: None,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }

    /// Show the close affordance.
    #[must_use]
    pub const fn removable(mut self, removable: bool) -> Self {
        self.removable = removable;
        self
    }

    /// Set the selected state.
    #[must_use]
    pub const fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Disable the chip.
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

    /// Whether the chip is selected.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    /// Toggle selection. No-op when disabled.
    pub fn toggle_selected(&mut self) -> Option<ChipClicked> {
        if self.disabled {
            return None;
        }
        self.selected = !self.selected;
        Some(ChipClicked {
            selected: self.selected,
        })
    }

    fn in_close_zone(&self, position: Point) -> bool {
        self.removable && position.x >= self.bounds.x + self.bounds.width - CLOSE_ZONE_WIDTH
    }
}

impl Widget for Chip {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let label_width = self.label.chars().count() as f32 * 7.0;
        let close = if self.removable { CLOSE_ZONE_WIDTH } else { 0.0 };
        constraints.constrain(Size::new(label_width + 24.0 + close, 32.0))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let background = if self.disabled {
            self.color.with_alpha(0.38)
        } else if self.selected {
            Color::new(0.1, 0.46, 0.82, 0.16)
        } else {
            self.color
        };
        canvas.fill_rect(self.bounds, background);

        let text_color = if self.disabled {
            self.label_color.with_alpha(0.38)
        } else {
            self.label_color
        };
        let style = TextStyle {
            size: 13.0,
            color: text_color,
            ..TextStyle::default()
        };
        canvas.draw_text(
            &self.label,
            Point::new(self.bounds.x + 12.0, self.bounds.center().y),
            &style,
        );
        if self.removable {
            canvas.draw_text(
                "\u{00d7}",
                Point::new(
                    self.bounds.x + self.bounds.width - CLOSE_ZONE_WIDTH / 2.0,
                    self.bounds.center().y,
                ),
                &style,
            );
        }
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
                if self.in_close_zone(*position) {
                    return Some(Box::new(ChipClosed));
                }
                self.toggle_selected()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_click_toggles_selection() {
        let mut chip = Chip::new("Filter");
        chip.layout(Rect::new(0.0, 0.0, 80.0, 32.0));
        let msg = chip.event(&Event::MouseDown {
            position: Point::new(20.0, 16.0),
            button: MouseButton::Left,
        });
        let clicked = msg.unwrap().downcast::<ChipClicked>().unwrap();
        assert!(clicked.selected);
        assert!(chip.is_selected());
    }

    #[test]
    fn test_close_zone_emits_closed() {
        let mut chip = Chip::new("Filter").removable(true);
        chip.layout(Rect::new(0.0, 0.0, 80.0, 32.0));
        let msg = chip.event(&Event::MouseDown {
            position: Point::new(75.0, 16.0),
            button: MouseButton::Left,
        });
        assert!(msg.unwrap().downcast::<ChipClosed>().is_ok());
        // Closing does not change selection.
        assert!(!chip.is_selected());
    }

    #[test]
    fn test_close_zone_inactive_without_removable() {
        let mut chip = Chip::new("Filter");
        chip.layout(Rect::new(0.0, 0.0, 80.0, 32.0));
        let msg = chip.event(&Event::MouseDown {
            position: Point::new(75.0, 16.0),
            button: MouseButton::Left,
        });
        assert!(msg.unwrap().downcast::<ChipClicked>().is_ok());
    }

    #[test]
    fn test_disabled_ignores_clicks() {
        let mut chip = Chip::new("Filter").removable(true).disabled(true);
        chip.layout(Rect::new(0.0, 0.0, 80.0, 32.0));
        assert!(chip
            .event(&Event::MouseDown {
                position: Point::new(20.0, 16.0),
                button: MouseButton::Left,
            })
            .is_none());
        assert!(chip.toggle_selected().is_none());
    }

    #[test]
    fn test_measure_reserves_close_zone() {
        let plain = Chip::new("Tag").measure(Constraints::unbounded());
        let removable = Chip::new("Tag")
            .removable(true)
            .measure(Constraints::unbounded());
        assert!(removable.width > plain.width);
    }

    #[test]
    fn test_accessible_name_falls_back_to_label() {
        let chip = Chip::new("Tag");
        assert_eq!(Widget::accessible_name(&chip), Some("Tag"));
    }
}
