use crate::error::{GeometryError, Result};
use crate::math::vec2::lerp;
use crate::math::Point2;

use super::CubicBezier;

/// Deepest subdivision level [`subdivide_levels`] accepts.
///
/// Level `k` holds `2^k` polygons.
pub const MAX_SUBDIVISION_DEPTH: usize = 10;

/// One level of de Casteljau subdivision at a parameter `t`.
///
/// ```text
/// a0 = lerp(p0, p1, t)   a1 = lerp(p1, p2, t)   a2 = lerp(p2, p3, t)
/// b0 = lerp(a0, a1, t)   b1 = lerp(a1, a2, t)
/// c0 = lerp(b0, b1, t)
/// ```
///
/// `c0` is the curve point at `t`; `left` and `right` are the control
/// polygons of the curve pieces on either side of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Subdivision {
    pub t: f64,
    pub a0: Point2,
    pub a1: Point2,
    pub a2: Point2,
    pub b0: Point2,
    pub b1: Point2,
    pub c0: Point2,
    pub left: CubicBezier,
    pub right: CubicBezier,
}

impl Subdivision {
    /// The intermediate interpolation lines: `a0-a1`, `a1-a2` and `b0-b1`.
    #[must_use]
    pub fn construction_lines(&self) -> [(Point2, Point2); 3] {
        [(self.a0, self.a1), (self.a1, self.a2), (self.b0, self.b1)]
    }
}

/// Splits `curve` at `t` by repeated linear interpolation.
///
/// A pure function of its inputs. Coincident control points give a fully
/// collapsed result, which is valid.
#[must_use]
pub fn subdivide(curve: &CubicBezier, t: f64) -> Subdivision {
    let CubicBezier { p0, p1, p2, p3 } = *curve;

    let a0 = lerp(&p0, &p1, t);
    let a1 = lerp(&p1, &p2, t);
    let a2 = lerp(&p2, &p3, t);

    let b0 = lerp(&a0, &a1, t);
    let b1 = lerp(&a1, &a2, t);

    let c0 = lerp(&b0, &b1, t);

    Subdivision {
        t,
        a0,
        a1,
        a2,
        b0,
        b1,
        c0,
        left: CubicBezier::new(p0, a0, b0, c0),
        right: CubicBezier::new(c0, b1, a2, p3),
    }
}

/// Repeatedly subdivides `curve` at `t`, `depth` levels deep.
///
/// Returns one entry per level: level 0 is `[curve]`, and every polygon of
/// level `k` is split into two consecutive polygons of level `k + 1`.
///
/// # Errors
///
/// Returns an error if `depth` exceeds [`MAX_SUBDIVISION_DEPTH`].
#[allow(clippy::cast_precision_loss)]
pub fn subdivide_levels(curve: &CubicBezier, t: f64, depth: usize) -> Result<Vec<Vec<CubicBezier>>> {
    if depth > MAX_SUBDIVISION_DEPTH {
        return Err(GeometryError::ParameterOutOfRange {
            parameter: "depth",
            value: depth as f64,
            min: 0.0,
            max: MAX_SUBDIVISION_DEPTH as f64,
        }
        .into());
    }

    let mut levels = Vec::with_capacity(depth + 1);
    levels.push(vec![*curve]);

    for _ in 0..depth {
        let next: Vec<CubicBezier> = levels
            .last()
            .map(|prev| {
                prev.iter()
                    .flat_map(|polygon| {
                        let s = subdivide(polygon, t);
                        [s.left, s.right]
                    })
                    .collect()
            })
            .unwrap_or_default();
        levels.push(next);
    }

    tracing::debug!(depth, t, polygons = levels.last().map_or(0, Vec::len), "subdivided curve");
    Ok(levels)
}
