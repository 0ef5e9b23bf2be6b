use super::Point2;

/// Squared length below which a segment is treated as a single point.
const DEGENERATE_LEN_SQ: f64 = 1e-20;

/// Projection of a point onto the infinite line through a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentProjection {
    /// Line parameter of the foot point; `[0, 1]` lies within the segment.
    pub t: f64,
    /// Perpendicular distance from the point to the infinite line.
    pub distance: f64,
}

impl SegmentProjection {
    /// Returns `true` if the foot point lies within the segment span.
    #[must_use]
    pub fn within_span(&self) -> bool {
        (0.0..=1.0).contains(&self.t)
    }
}

/// Projects `p` onto the line through `a` and `b`.
///
/// Zero-length segments project every point to `t = 0` with the
/// point-to-point distance.
#[must_use]
pub fn project_onto_segment(p: &Point2, a: &Point2, b: &Point2) -> SegmentProjection {
    let d = b - a;
    let len_sq = d.norm_squared();

    if len_sq < DEGENERATE_LEN_SQ {
        return SegmentProjection {
            t: 0.0,
            distance: (p - a).norm(),
        };
    }

    let ap = p - a;
    let t = ap.dot(&d) / len_sq;
    // |cross| / |d| is the distance to the infinite line.
    let distance = (ap.x * d.y - ap.y * d.x).abs() / len_sq.sqrt();

    SegmentProjection { t, distance }
}

/// Returns the minimum distance from `p` to the segment `a`-`b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let d = b - a;
    let len_sq = d.norm_squared();

    if len_sq < DEGENERATE_LEN_SQ {
        return (p - a).norm();
    }

    // Project onto the infinite line, clamp to [0, 1].
    let t = ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    let closest = a + d * t;

    (p - closest).norm()
}

/// Returns the distance from `p` to the outline of a circle.
#[must_use]
pub fn point_to_circle_dist(p: &Point2, center: &Point2, radius: f64) -> f64 {
    ((p - center).norm() - radius).abs()
}
