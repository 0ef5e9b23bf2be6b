mod color;
mod style;

pub use color::Color;
pub use style::{HandleStyle, Style};

use std::f64::consts::TAU;

use crate::math::Point2;

/// A 2D drawing context with path, stroke and arc primitives.
///
/// The engine only issues drawing commands; canvas size, clearing and
/// presentation belong to the caller.
pub trait Surface {
    /// Starts a new, empty path.
    fn begin_path(&mut self);

    /// Starts a new sub-path at `p`.
    fn move_to(&mut self, p: Point2);

    /// Adds a straight edge from the current point to `p`.
    fn line_to(&mut self, p: Point2);

    /// Adds a circular arc around `center` from `start_angle` to `end_angle`.
    fn arc(&mut self, center: Point2, radius: f64, start_angle: f64, end_angle: f64);

    /// Closes the current sub-path.
    fn close_path(&mut self);

    /// Sets the width used by subsequent strokes.
    fn set_line_width(&mut self, width: f64);

    /// Sets the color used by subsequent strokes.
    fn set_stroke_color(&mut self, color: Color);

    /// Sets the color used by subsequent fills.
    fn set_fill_color(&mut self, color: Color);

    /// Strokes the current path.
    fn stroke(&mut self);

    /// Fills the current path.
    fn fill(&mut self);
}

/// Strokes the straight segment `a`-`b` with `style`.
pub fn stroke_line(surface: &mut dyn Surface, a: Point2, b: Point2, style: &Style) {
    surface.begin_path();
    surface.move_to(a);
    surface.line_to(b);
    surface.set_line_width(style.width());
    surface.set_stroke_color(style.color());
    surface.stroke();
}

/// Strokes a full circle.
pub fn stroke_circle(surface: &mut dyn Surface, center: Point2, radius: f64, style: &Style) {
    surface.begin_path();
    surface.arc(center, radius, 0.0, TAU);
    surface.close_path();
    surface.set_line_width(style.width());
    surface.set_stroke_color(style.color());
    surface.stroke();
}

/// Draws a handle disc at `center`.
pub fn draw_handle(surface: &mut dyn Surface, center: Point2, style: &HandleStyle) {
    surface.begin_path();
    surface.arc(center, style.radius, 0.0, TAU);
    surface.close_path();
    if style.fill {
        surface.set_fill_color(style.color);
        surface.fill();
    } else {
        surface.set_line_width(style.width);
        surface.set_stroke_color(style.color);
        surface.stroke();
    }
}

/// A single recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    BeginPath,
    MoveTo(Point2),
    LineTo(Point2),
    Arc {
        center: Point2,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    ClosePath,
    LineWidth(f64),
    StrokeColor(Color),
    FillColor(Color),
    Stroke,
    Fill,
}

/// A [`Surface`] that records every call, for headless rendering and tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Creates an empty recording.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded commands in call order.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Counts the recorded `Stroke` commands.
    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Stroke))
            .count()
    }

    /// Discards all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, p: Point2) {
        self.commands.push(DrawCommand::MoveTo(p));
    }

    fn line_to(&mut self, p: Point2) {
        self.commands.push(DrawCommand::LineTo(p));
    }

    fn arc(&mut self, center: Point2, radius: f64, start_angle: f64, end_angle: f64) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::LineWidth(width));
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::StrokeColor(color));
    }

    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::FillColor(color));
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_line_records_path_then_style() {
        let mut surface = RecordingSurface::new();
        let style = Style::default();
        stroke_line(&mut surface, Point2::new(0.0, 0.0), Point2::new(1.0, 1.0), &style);
        assert_eq!(
            surface.commands(),
            &[
                DrawCommand::BeginPath,
                DrawCommand::MoveTo(Point2::new(0.0, 0.0)),
                DrawCommand::LineTo(Point2::new(1.0, 1.0)),
                DrawCommand::LineWidth(2.0),
                DrawCommand::StrokeColor(style.color()),
                DrawCommand::Stroke,
            ]
        );
    }

    #[test]
    fn filled_handle_fills_instead_of_stroking() {
        let mut surface = RecordingSurface::new();
        draw_handle(&mut surface, Point2::new(5.0, 5.0), &HandleStyle::default());
        assert_eq!(surface.stroke_count(), 0);
        assert_eq!(surface.commands().last(), Some(&DrawCommand::Fill));
    }

    #[test]
    fn outlined_handle_strokes() {
        let mut surface = RecordingSurface::new();
        let style = HandleStyle {
            fill: false,
            width: 1.0,
            ..HandleStyle::default()
        };
        draw_handle(&mut surface, Point2::new(5.0, 5.0), &style);
        assert_eq!(surface.stroke_count(), 1);
    }

    #[test]
    fn clear_discards_commands() {
        let mut surface = RecordingSurface::new();
        stroke_circle(&mut surface, Point2::origin(), 3.0, &Style::default());
        assert!(!surface.commands().is_empty());
        surface.clear();
        assert!(surface.commands().is_empty());
    }
}
