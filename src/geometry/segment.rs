use crate::math::distance_2d::{point_to_segment_dist, project_onto_segment};
use crate::math::{vec2, Point2, TOLERANCE};
use crate::render::{stroke_line, Style, Surface};

/// A straight line segment with a stroke style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    start: Point2,
    end: Point2,
    style: Style,
}

impl LineSegment {
    /// Creates a new segment from `start` to `end`.
    #[must_use]
    pub fn new(start: Point2, end: Point2, style: Style) -> Self {
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

    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Euclidean length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        vec2::lerp(&self.start, &self.end, 0.5)
    }

    /// Minimum distance from `p` to any point of the segment.
    #[must_use]
    pub fn distance_to(&self, p: &Point2) -> f64 {
        point_to_segment_dist(p, &self.start, &self.end)
    }

    /// Tests whether `position` lies within `tolerance` perpendicular distance
    /// of the segment and projects inside its span.
    ///
    /// The hit region is the band of width `2 * tolerance` between the two
    /// end caps, without rounded caps. On a polyline, points just outside
    /// the convex side of a bend can therefore miss both adjacent segments
    /// even when they are within `tolerance` of the shared vertex.
    ///
    /// A zero-length segment is hit within `tolerance` of its single point.
    #[must_use]
    pub fn is_hit(&self, position: &Point2, tolerance: f64) -> bool {
        let proj = project_onto_segment(position, &self.start, &self.end);
        proj.within_span() && proj.distance <= tolerance + TOLERANCE
    }

    /// Strokes the segment onto `surface`.
    pub fn draw(&self, surface: &mut dyn Surface) {
        stroke_line(surface, self.start, self.end, &self.style);
    }
}

/// Returns `true` if `position` hits any of `segments` within `tolerance`.
#[must_use]
pub fn is_hit(segments: &[LineSegment], position: &Point2, tolerance: f64) -> bool {
    segments.iter().any(|s| s.is_hit(position, tolerance))
}
