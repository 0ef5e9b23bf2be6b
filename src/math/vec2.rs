use crate::error::{GeometryError, Result};

use super::{Point2, Vector2, TOLERANCE};

/// Linear interpolation `(1 - t) * a + t * b`.
#[must_use]
pub fn lerp(a: &Point2, b: &Point2, t: f64) -> Point2 {
    Point2::new((1.0 - t) * a.x + t * b.x, (1.0 - t) * a.y + t * b.y)
}

/// Rotates `v` by 90 degrees counter-clockwise: `(-v.y, v.x)`.
#[must_use]
pub fn perpendicular(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Returns `v` scaled to unit length, or `None` for a (near) zero vector.
#[must_use]
pub fn try_normalize(v: &Vector2) -> Option<Vector2> {
    let len = v.norm();
    if len < TOLERANCE || !len.is_finite() {
        return None;
    }
    Some(v / len)
}

/// Returns `true` if both coordinates are finite.
#[must_use]
pub fn is_finite(p: &Point2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// Rejects points with NaN or infinite coordinates.
///
/// # Errors
///
/// Returns [`GeometryError::NonFinitePoint`] if either coordinate is not finite.
pub fn ensure_finite(p: &Point2) -> Result<Point2> {
    if is_finite(p) {
        Ok(*p)
    } else {
        Err(GeometryError::NonFinitePoint { x: p.x, y: p.y }.into())
    }
}
