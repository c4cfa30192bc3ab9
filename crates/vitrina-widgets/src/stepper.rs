//! Stepper widget for multi-step flows.

use vitrina_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, Constraints, Event, MouseButton, Point, Rect, Size, TextStyle, TypeId, Widget,
};

use serde::{Deserialize, Serialize};
use std::any::Any;

/// Height of the step header band.
const HEADER_HEIGHT: f32 = 72.0;
/// Diameter of a step dot.
const DOT_SIZE: f32 = 24.0;

/// One step in the flow.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Step {
    /// Step title
    pub title: String,
    /// Optional subtitle
    pub subtitle: String,
    /// Whether the step has been completed
    pub complete: bool,
    /// Whether the step is in an error state
    pub error: bool,
    /// Whether the step cannot be visited
    pub disabled: bool,
}

impl Step {
    /// Create a step with a title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the subtitle.
    #[must_use]
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Mark complete.
    #[must_use]
    pub const fn complete(mut self, complete: bool) -> Self {
        self.complete = complete;
        self
    }

    /// Mark as errored.
    #[must_use]
    pub const fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    /// Disable the step.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Message emitted when the active step changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepChanged {
    /// Index of the newly active step
    pub step: usize,
}

/// Message emitted when the flow reaches its final step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepperCompleted;

/// Stepper widget.
///
/// Linear by default: header clicks only reach already-visited steps. With
/// `non_linear` any enabled step is reachable; `editable` additionally allows
/// revisiting completed steps by click.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stepper {
    /// Ordered steps
    steps: Vec<Step>,
    /// Index of the active step
    current: usize,
    /// Whether any enabled step is directly reachable
    non_linear: bool,
    /// Whether completed steps may be revisited by click
    editable: bool,
    /// Accent color
    accent_color: Color,
    /// Completed-step color
    complete_color: Color,
    /// Error-step color
    error_color: Color,
    /// Accessible name
    accessible_name_value: Option<String>,
    /// Test ID
    test_id_value: Option<String>,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Default for Stepper {
    fn default() -> Self {
        Self::new()
    }
}

impl Stepper {
    /// Create an empty stepper.
    #[must_use]
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            current: 0,
            non_linear: false,
            editable: false,
            accent_color: Color::new(0.1, 0.46, 0.82, 1.0),
            complete_color: Color::new(0.3, 0.69, 0.31, 1.0),
            error_color: Color::new(1.0, 0.32, 0.32, 1.0),
            accessible_name_value: None,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }

    /// Set the steps.
    #[must_use]
    pub fn steps(mut self, steps: Vec<Step>) -> Self {
        self.steps = steps;
        self.current = self.current.min(self.steps.len().saturating_sub(1));
        self
    }

    /// Append a step.
    #[must_use]
    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Allow direct navigation to any enabled step.
    #[must_use]
    pub const fn non_linear(mut self, non_linear: bool) -> Self {
        self.non_linear = non_linear;
        self
    }

    /// Allow revisiting completed steps by click.
    #[must_use]
    pub const fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
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

    /// Index of the active step.
    #[must_use]
    pub const fn current_step(&self) -> usize {
        self.current
    }

    /// Number of steps.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// The active step, if any.
    #[must_use]
    pub fn active(&self) -> Option<&Step> {
        self.steps.get(self.current)
    }

    /// Advance to the next step, marking the current one complete.
    ///
    /// Reaching the final step additionally signals completion of the flow.
    /// At the final step this is a no-op.
    pub fn next(&mut self) -> Option<(StepChanged, Option<StepperCompleted>)> {
        if self.current + 1 >= self.steps.len() {
            return None;
        }
        if let Some(step) = self.steps.get_mut(self.current) {
            step.complete = true;
        }
        self.current += 1;
        let completed = (self.current == self.steps.len() - 1).then_some(StepperCompleted);
        Some((StepChanged { step: self.current }, completed))
    }

    /// Go back one step. No-op at the first step. Does not clear completion.
    pub fn previous(&mut self) -> Option<StepChanged> {
        if self.current == 0 {
            return None;
        }
        self.current -= 1;
        Some(StepChanged { step: self.current })
    }

    /// Jump directly to a step.
    ///
    /// Disabled and out-of-range targets are silent no-ops. In linear mode
    /// only earlier steps are reachable unless `editable` or `non_linear` is
    /// set.
    pub fn jump_to(&mut self, index: usize) -> Option<StepChanged> {
        let step = self.steps.get(index)?;
        if step.disabled || index == self.current {
            return None;
        }
        if !(self.non_linear || self.editable || index < self.current) {
            return None;
        }
        self.current = index;
        Some(StepChanged { step: index })
    }

    /// Reset to the first step and clear complete/error flags.
    pub fn reset(&mut self) {
        self.current = 0;
        for step in &mut self.steps {
            step.complete = false;
            step.error = false;
        }
    }

    fn dot_color(&self, index: usize, step: &Step) -> Color {
        if step.error {
            self.error_color
        } else if step.disabled {
            Color::new(0.62, 0.62, 0.62, 1.0)
        } else if step.complete {
            self.complete_color
        } else if index == self.current {
            self.accent_color
        } else {
            self.accent_color.with_alpha(0.38)
        }
    }

    fn step_index_at(&self, position: Point) -> Option<usize> {
        if self.steps.is_empty() || position.y > self.bounds.y + HEADER_HEIGHT {
            return None;
        }
        let slot = self.bounds.width / self.steps.len() as f32;
        let index = ((position.x - self.bounds.x) / slot) as usize;
        (index < self.steps.len()).then_some(index)
    }
}

impl Widget for Stepper {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::new(
            (self.steps.len() as f32).max(1.0) * 160.0,
            HEADER_HEIGHT,
        ))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if self.steps.is_empty() {
            return;
        }
        let slot = self.bounds.width / self.steps.len() as f32;
        let dot_y = self.bounds.y + HEADER_HEIGHT / 2.0;
        let title_style = TextStyle {
            size: 14.0,
            color: Color::new(0.0, 0.0, 0.0, 0.87),
            ..TextStyle::default()
        };
        let subtitle_style = TextStyle {
            size: 12.0,
            color: Color::new(0.0, 0.0, 0.0, 0.54),
            ..TextStyle::default()
        };

        for (index, step) in self.steps.iter().enumerate() {
            let dot_center = Point::new(
                self.bounds.x + index as f32 * slot + DOT_SIZE,
                dot_y,
            );
            canvas.fill_circle(dot_center, DOT_SIZE / 2.0, self.dot_color(index, step));
            canvas.draw_text(
                &(index + 1).to_string(),
                dot_center,
                &TextStyle {
                    size: 12.0,
                    color: Color::WHITE,
                    ..TextStyle::default()
                },
            );

            let text_x = dot_center.x + DOT_SIZE;
            canvas.draw_text(&step.title, Point::new(text_x, dot_y - 8.0), &title_style);
            if !step.subtitle.is_empty() {
                canvas.draw_text(
                    &step.subtitle,
                    Point::new(text_x, dot_y + 8.0),
                    &subtitle_style,
                );
            }

            // Connector toward the next step
            if index + 1 < self.steps.len() {
                let connector_color = if step.complete || index == self.current {
                    self.accent_color
                } else {
                    Color::new(0.0, 0.0, 0.0, 0.12)
                };
                canvas.draw_line(
                    Point::new(dot_center.x + slot * 0.55, dot_y),
                    Point::new(dot_center.x + slot * 0.95, dot_y),
                    connector_color,
                    1.0,
                );
            }
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } if self.bounds.contains_point(position) => {
                let index = self.step_index_at(*position)?;
                self.jump_to(index)
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

    fn three_steps() -> Stepper {
        Stepper::new().steps(vec![
            Step::new("Account"),
            Step::new("Address").subtitle("Shipping"),
            Step::new("Confirm"),
        ])
    }

    #[test]
    fn test_next_marks_complete_and_advances() {
        let mut stepper = three_steps();
        let (msg, completed) = stepper.next().unwrap();
        assert_eq!(msg.step, 1);
        assert!(completed.is_none());
        assert!(stepper.steps[0].complete);
        assert_eq!(stepper.current_step(), 1);
    }

    #[test]
    fn test_reaching_last_step_signals_completion() {
        let mut stepper = three_steps();
        stepper.next();
        let (msg, completed) = stepper.next().unwrap();
        assert_eq!(msg.step, 2);
        assert_eq!(completed, Some(StepperCompleted));
    }

    #[test]
    fn test_next_at_last_step_is_noop() {
        let mut stepper = three_steps();
        stepper.next();
        stepper.next();
        assert!(stepper.next().is_none());
        assert_eq!(stepper.current_step(), 2);
    }

    #[test]
    fn test_previous_does_not_clear_completion() {
        let mut stepper = three_steps();
        stepper.next();
        let msg = stepper.previous().unwrap();
        assert_eq!(msg.step, 0);
        assert!(stepper.steps[0].complete);
    }

    #[test]
    fn test_previous_at_first_step_is_noop() {
        let mut stepper = three_steps();
        assert!(stepper.previous().is_none());
    }

    #[test]
    fn test_linear_jump_forward_is_noop() {
        let mut stepper = three_steps();
        assert!(stepper.jump_to(2).is_none());
        assert_eq!(stepper.current_step(), 0);
    }

    #[test]
    fn test_linear_jump_backward_allowed() {
        let mut stepper = three_steps();
        stepper.next();
        stepper.next();
        let msg = stepper.jump_to(0).unwrap();
        assert_eq!(msg.step, 0);
    }

    #[test]
    fn test_non_linear_jump_forward() {
        let mut stepper = three_steps().non_linear(true);
        let msg = stepper.jump_to(2).unwrap();
        assert_eq!(msg.step, 2);
    }

    #[test]
    fn test_jump_to_disabled_step_is_noop() {
        let mut stepper = Stepper::new()
            .non_linear(true)
            .step(Step::new("One"))
            .step(Step::new("Two").disabled(true));
        assert!(stepper.jump_to(1).is_none());
    }

    #[test]
    fn test_jump_out_of_range_is_noop() {
        let mut stepper = three_steps().non_linear(true);
        assert!(stepper.jump_to(10).is_none());
    }

    #[test]
    fn test_jump_to_current_is_noop() {
        let mut stepper = three_steps().non_linear(true);
        assert!(stepper.jump_to(0).is_none());
    }

    #[test]
    fn test_reset_clears_flags() {
        let mut stepper = three_steps();
        stepper.next();
        stepper.next();
        stepper.reset();
        assert_eq!(stepper.current_step(), 0);
        assert!(stepper.steps.iter().all(|s| !s.complete && !s.error));
    }

    #[test]
    fn test_header_click_jumps_in_non_linear_mode() {
        let mut stepper = three_steps().non_linear(true);
        stepper.layout(Rect::new(0.0, 0.0, 480.0, 72.0));
        let msg = stepper.event(&Event::MouseDown {
            position: Point::new(400.0, 36.0),
            button: MouseButton::Left,
        });
        let changed = msg.unwrap().downcast::<StepChanged>().unwrap();
        assert_eq!(changed.step, 2);
    }

    #[test]
    fn test_empty_stepper_is_inert() {
        let mut stepper = Stepper::new();
        assert!(stepper.next().is_none());
        assert!(stepper.previous().is_none());
        assert!(stepper.active().is_none());
    }
}
