use crate::error::{Result, SceneError};
use crate::geometry::LineSegment;
use crate::math::{vec2, Point2, HIT_TOLERANCE};
use crate::render::{Style, Surface};

use super::{ControlSlot, DrawOutcome, Shape};

/// A straight line between two draggable endpoints.
#[derive(Debug, Clone)]
pub struct StraightLine {
    start: Point2,
    end: Point2,
    style: Style,
}

impl StraightLine {
    #[must_use]
    pub fn new(start: Point2, end: Point2, style: Style) -> Self {
        tracing::debug!(?start, ?end, "creating straight line");
        Self { start, end, style }
    }

    #[must_use]
    pub fn start(&self) -> Point2 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> Point2 {
        self.end
    }

    fn segment(&self) -> LineSegment {
        LineSegment::new(self.start, self.end, self.style)
    }
}

impl Shape for StraightLine {
    fn draw(&self, surface: &mut dyn Surface) -> Result<DrawOutcome> {
        self.segment().draw(surface);
        Ok(DrawOutcome::Complete)
    }

    fn is_hit(&self, position: &Point2) -> Result<bool> {
        Ok(self.segment().is_hit(position, HIT_TOLERANCE))
    }

    fn control_slots(&self) -> Vec<ControlSlot> {
        vec![ControlSlot::Point(0), ControlSlot::Point(1)]
    }

    fn control_point(&self, slot: ControlSlot) -> Option<Point2> {
        match slot {
            ControlSlot::Point(0) => Some(self.start),
            ControlSlot::Point(1) => Some(self.end),
            _ => None,
        }
    }

    fn set_control_point(&mut self, slot: ControlSlot, position: Point2) -> Result<()> {
        let position = vec2::ensure_finite(&position)?;
        match slot {
            ControlSlot::Point(0) => self.start = position,
            ControlSlot::Point(1) => self.end = position,
            _ => return Err(SceneError::InvalidSlot(slot.to_string()).into()),
        }
        Ok(())
    }

    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn line() -> StraightLine {
        StraightLine::new(Point2::new(0.0, 0.0), Point2::new(100.0, 0.0), Style::default())
    }

    #[test]
    fn hit_within_tolerance() {
        let l = line();
        assert!(l.is_hit(&Point2::new(50.0, HIT_TOLERANCE - 0.5)).unwrap());
        assert!(!l.is_hit(&Point2::new(50.0, HIT_TOLERANCE + 0.5)).unwrap());
        assert!(!l.is_hit(&Point2::new(120.0, 0.0)).unwrap());
    }

    #[test]
    fn endpoints_are_slots() {
        let mut l = line();
        l.set_control_point(ControlSlot::Point(0), Point2::new(1.0, 1.0)).unwrap();
        assert_eq!(l.start(), Point2::new(1.0, 1.0));
        assert!(l.set_control_point(ControlSlot::Radius, Point2::origin()).is_err());
        assert!(l.control_point(ControlSlot::Point(2)).is_none());
    }
}
