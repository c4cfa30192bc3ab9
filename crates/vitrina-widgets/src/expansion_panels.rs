//! Accordion of expansion panels.

use vitrina_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, Constraints, Event, MouseButton, Point, Rect, Size, TextStyle, TypeId, Widget,
};

use serde::{Deserialize, Serialize};
use std::any::Any;

/// Height of a collapsed panel header.
const PANEL_HEADER_HEIGHT: f32 = 48.0;
/// Height of an expanded panel body.
const PANEL_BODY_HEIGHT: f32 = 96.0;

/// One panel of the accordion.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Panel {
    /// Header title
    pub title: String,
    /// Body text
    pub body: String,
    /// Whether the panel is open
    pub expanded: bool,
    /// Whether the panel ignores clicks
    pub disabled: bool,
}

impl Panel {
    /// Create a collapsed panel.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the body text.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Start expanded.
    #[must_use]
    pub const fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Disable the panel.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Message emitted when a panel opens or closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelToggled {
    /// Index of the toggled panel
    pub panel: usize,
    /// Whether it is now open
    pub expanded: bool,
}

/// Expansion panel group.
///
/// Accordion by default: opening a panel closes the others. `multiple` lifts
/// that restriction; `mandatory` refuses to close the last open panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpansionPanels {
    /// The panels in order
    panels: Vec<Panel>,
    /// Whether several panels may be open at once
    multiple: bool,
    /// Whether at least one panel must stay open
    mandatory: bool,
    /// Header text color
    text_color: Color,
    /// Divider color
    divider_color: Color,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Default for ExpansionPanels {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpansionPanels {
    /// Create an empty accordion.
    #[must_use]
    pub fn new() -> Self {
        Self {
            panels: Vec::new(),
            multiple: false,
            mandatory: false,
            text_color: Color::new(0.0, 0.0, 0.0, 0.87),
            divider_color: Color::new(0.0, 0.0, 0.0, 0.12),
            accessible_name_value: None,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }

    /// Set the panels.
    #[must_use]
    pub fn panels(mut self, panels: Vec<Panel>) -> Self {
        self.panels = panels;
        self
    }

    /// Append a panel.
    #[must_use]
    pub fn panel(mut self, panel: Panel) -> Self {
        self.panels.push(panel);
        self
    }

    /// Allow several open panels.
    #[must_use]
    pub const fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Keep at least one panel open.
    #[must_use]
    pub const fn mandatory(mut self, mandatory: bool) -> Self {
        self.mandatory = mandatory;
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

    /// Indices of the open panels, in order.
    #[must_use]
    pub fn expanded_panels(&self) -> Vec<usize> {
        self.panels
            .iter()
            .enumerate()
            .filter_map(|(index, panel)| panel.expanded.then_some(index))
            .collect()
    }

    /// Number of panels.
    #[must_use]
    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    /// Toggle a panel.
    ///
    /// Disabled and out-of-range panels are silent no-ops, as is closing the
    /// only open panel in mandatory mode.
    pub fn toggle(&mut self, index: usize) -> Option<PanelToggled> {
        let panel = self.panels.get(index)?;
        if panel.disabled {
            return None;
        }
        let opening = !panel.expanded;
        if !opening && self.mandatory && self.expanded_panels().len() == 1 {
            return None;
        }
        if opening && !self.multiple {
            for other in &mut self.panels {
                other.expanded = false;
            }
        }
        if let Some(panel) = self.panels.get_mut(index) {
            panel.expanded = opening;
        }
        Some(PanelToggled {
            panel: index,
            expanded: opening,
        })
    }

    fn panel_height(panel: &Panel) -> f32 {
        if panel.expanded {
            PANEL_HEADER_HEIGHT + PANEL_BODY_HEIGHT
        } else {
            PANEL_HEADER_HEIGHT
        }
    }

    /// Panel whose header band contains the y coordinate.
    fn panel_at(&self, position: Point) -> Option<usize> {
        let mut top = self.bounds.y;
        for (index, panel) in self.panels.iter().enumerate() {
            if position.y >= top && position.y < top + PANEL_HEADER_HEIGHT {
                return Some(index);
            }
            top += Self::panel_height(panel);
        }
        None
    }
}

impl Widget for ExpansionPanels {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let height: f32 = self.panels.iter().map(Self::panel_height).sum();
        constraints.constrain(Size::new(320.0, height.max(PANEL_HEADER_HEIGHT)))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let title_style = TextStyle {
            size: 14.0,
            color: self.text_color,
            ..TextStyle::default()
        };
        let body_style = TextStyle {
            size: 13.0,
            color: self.text_color.with_alpha(0.6),
            ..TextStyle::default()
        };

        let mut top = self.bounds.y;
        for panel in &self.panels {
            let header_center = top + PANEL_HEADER_HEIGHT / 2.0;
            let style = if panel.disabled {
                TextStyle {
                    color: self.text_color.with_alpha(0.38),
                    ..title_style.clone()
                }
            } else {
                title_style.clone()
            };
            canvas.draw_text(
                &panel.title,
                Point::new(self.bounds.x + 16.0, header_center),
                &style,
            );
            // Chevron points down when collapsed, up when open
            canvas.draw_text(
                if panel.expanded { "\u{2303}" } else { "\u{2304}" },
                Point::new(self.bounds.x + self.bounds.width - 24.0, header_center),
                &style,
            );

            if panel.expanded {
                canvas.draw_text(
                    &panel.body,
                    Point::new(
                        self.bounds.x + 16.0,
                        top + PANEL_HEADER_HEIGHT + PANEL_BODY_HEIGHT / 2.0,
                    ),
                    &body_style,
                );
            }

            top += Self::panel_height(panel);
            canvas.draw_line(
                Point::new(self.bounds.x, top),
                Point::new(self.bounds.x + self.bounds.width, top),
                self.divider_color,
                1.0,
            );
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } if self.bounds.contains_point(position) => {
                let index = self.panel_at(*position)?;
                self.toggle(index)
                    .map(|msg| Box::new(msg) as Box<dyn Any + Send>)
            }
            _ => None,
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::List
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_panels() -> ExpansionPanels {
        ExpansionPanels::new().panels(vec![
            Panel::new("Shipping").body("Ships in 2 days"),
            Panel::new("Returns").body("30 day window"),
            Panel::new("Warranty").body("One year"),
        ])
    }

    #[test]
    fn test_accordion_closes_others() {
        let mut panels = three_panels();
        panels.toggle(0);
        let msg = panels.toggle(2).unwrap();
        assert_eq!(msg.panel, 2);
        assert!(msg.expanded);
        assert_eq!(panels.expanded_panels(), vec![2]);
    }

    #[test]
    fn test_multiple_mode_keeps_others_open() {
        let mut panels = three_panels().multiple(true);
        panels.toggle(0);
        panels.toggle(2);
        assert_eq!(panels.expanded_panels(), vec![0, 2]);
    }

    #[test]
    fn test_toggle_closes_open_panel() {
        let mut panels = three_panels();
        panels.toggle(1);
        let msg = panels.toggle(1).unwrap();
        assert!(!msg.expanded);
        assert!(panels.expanded_panels().is_empty());
    }

    #[test]
    fn test_mandatory_keeps_last_panel_open() {
        let mut panels = three_panels().mandatory(true);
        panels.toggle(1);
        assert!(panels.toggle(1).is_none());
        assert_eq!(panels.expanded_panels(), vec![1]);
    }

    #[test]
    fn test_mandatory_allows_closing_when_another_open() {
        let mut panels = three_panels().multiple(true).mandatory(true);
        panels.toggle(0);
        panels.toggle(1);
        let msg = panels.toggle(0).unwrap();
        assert!(!msg.expanded);
        assert_eq!(panels.expanded_panels(), vec![1]);
    }

    #[test]
    fn test_disabled_panel_is_noop() {
        let mut panels = ExpansionPanels::new()
            .panel(Panel::new("A"))
            .panel(Panel::new("B").disabled(true));
        assert!(panels.toggle(1).is_none());
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut panels = three_panels();
        assert!(panels.toggle(9).is_none());
    }

    #[test]
    fn test_click_on_second_header_toggles_it() {
        let mut panels = three_panels();
        panels.layout(Rect::new(0.0, 0.0, 320.0, 240.0));
        let msg = panels.event(&Event::MouseDown {
            position: Point::new(20.0, 60.0),
            button: MouseButton::Left,
        });
        let toggled = msg.unwrap().downcast::<PanelToggled>().unwrap();
        assert_eq!(toggled.panel, 1);
        assert!(toggled.expanded);
    }

    #[test]
    fn test_headers_shift_below_open_panel() {
        let mut panels = three_panels();
        panels.toggle(0);
        panels.layout(Rect::new(0.0, 0.0, 320.0, 340.0));
        // Panel 0 now occupies 48 + 96 = 144; panel 1's header starts there.
        let msg = panels.event(&Event::MouseDown {
            position: Point::new(20.0, 150.0),
            button: MouseButton::Left,
        });
        let toggled = msg.unwrap().downcast::<PanelToggled>().unwrap();
        assert_eq!(toggled.panel, 1);
    }

    #[test]
    fn test_measure_grows_with_open_panels() {
        let mut panels = three_panels();
        let closed = panels.measure(Constraints::unbounded());
        panels.toggle(0);
        let open = panels.measure(Constraints::unbounded());
        assert!(open.height > closed.height);
    }
}
