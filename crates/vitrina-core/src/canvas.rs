//! Canvas implementations for rendering.

use crate::geometry::{Point, Rect};
use crate::widget::{Canvas, TextStyle};
use crate::Color;
use serde::{Deserialize, Serialize};

/// A recorded draw operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// A filled or stroked rectangle.
    Rect {
        /// Bounds of the rectangle
        bounds: Rect,
        /// Fill/stroke color
        color: Color,
        /// Stroke width (None = filled)
        stroke_width: Option<f32>,
    },
    /// A text run.
    Text {
        /// Text content
        content: String,
        /// Baseline position
        position: Point,
        /// Style
        style: TextStyle,
    },
    /// A line segment.
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
        /// Color
        color: Color,
        /// Width
        width: f32,
    },
    /// A filled or stroked circle.
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Color
        color: Color,
        /// Stroke width (None = filled)
        stroke_width: Option<f32>,
    },
    /// A polyline path.
    Path {
        /// Path points
        points: Vec<Point>,
        /// Color
        color: Color,
        /// Width
        width: f32,
    },
}

/// A `Canvas` implementation that records draw operations as [`DrawCommand`]s.
///
/// Used by widget tests to verify what was painted without a real backend.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Collect the content of every recorded text command, in paint order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect {
            bounds: rect,
            color,
            stroke_width: None,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.commands.push(DrawCommand::Rect {
            bounds: rect,
            color,
            stroke_width: Some(width),
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            stroke_width: None,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Color, width: f32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            stroke_width: Some(width),
        });
    }

    fn draw_path(&mut self, points: &[Point], color: Color, width: f32) {
        self.commands.push(DrawCommand::Path {
            points: points.to_vec(),
            color,
            width,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_empty() {
        let canvas = RecordingCanvas::new();
        assert!(canvas.is_empty());
        assert_eq!(canvas.command_count(), 0);
    }

    #[test]
    fn test_fill_rect_recorded() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK);
        assert_eq!(canvas.command_count(), 1);
        assert!(matches!(
            canvas.commands()[0],
            DrawCommand::Rect {
                stroke_width: None,
                ..
            }
        ));
    }

    #[test]
    fn test_stroke_rect_records_width() {
        let mut canvas = RecordingCanvas::new();
        canvas.stroke_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK, 2.0);
        assert!(matches!(
            canvas.commands()[0],
            DrawCommand::Rect {
                stroke_width: Some(w),
                ..
            } if w == 2.0
        ));
    }

    #[test]
    fn test_texts_helper() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::default(), Color::WHITE);
        canvas.draw_text("hello", Point::ORIGIN, &TextStyle::default());
        canvas.draw_text("world", Point::ORIGIN, &TextStyle::default());
        assert_eq!(canvas.texts(), vec!["hello", "world"]);
    }

    #[test]
    fn test_take_commands_clears() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rect(Rect::default(), Color::WHITE);
        let commands = canvas.take_commands();
        assert_eq!(commands.len(), 1);
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_circle(Point::ORIGIN, 5.0, Color::BLACK);
        canvas.clear();
        assert!(canvas.is_empty());
    }
}
