pub mod bezier;
pub mod casteljau;
pub mod sampler;
pub mod segment;
pub mod tickmarks;

pub use bezier::{bezier_point, CubicBezier};
pub use casteljau::{subdivide, subdivide_levels, Subdivision, MAX_SUBDIVISION_DEPTH};
pub use sampler::{Sample, SampleCurve, SampledCurve, DEFAULT_SEGMENT_COUNT, MAX_SEGMENT_COUNT};
pub use segment::{is_hit, LineSegment};
pub use tickmarks::{generate_tick_marks, TickMark, TICK_HALF_LENGTH, TICK_STYLE};

use crate::error::{Result, SamplingError};
use crate::math::{vec2, Point2};

/// Parameter domain for a curve.
///
/// Always ordered (`t_min < t_max`) and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    t_min: f64,
    t_max: f64,
}

impl CurveDomain {
    /// The unit interval `[0, 1]` used by Bézier curves.
    pub const UNIT: Self = Self {
        t_min: 0.0,
        t_max: 1.0,
    };

    /// Creates a new curve domain, swapping the bounds if they are inverted.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is not finite, the span between them
    /// overflows, or both bounds are equal.
    #[allow(clippy::float_cmp)]
    pub fn new(t_min: f64, t_max: f64) -> Result<Self> {
        if !t_min.is_finite() || !t_max.is_finite() || !(t_max - t_min).is_finite() {
            return Err(SamplingError::NonFiniteDomain { t_min, t_max }.into());
        }
        if t_min == t_max {
            return Err(SamplingError::DegenerateDomain(t_min).into());
        }
        if t_min > t_max {
            Ok(Self {
                t_min: t_max,
                t_max: t_min,
            })
        } else {
            Ok(Self { t_min, t_max })
        }
    }

    /// Start of the parameter range.
    #[must_use]
    pub fn t_min(&self) -> f64 {
        self.t_min
    }

    /// End of the parameter range.
    #[must_use]
    pub fn t_max(&self) -> f64 {
        self.t_max
    }

    /// Length of the parameter range.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.t_max - self.t_min
    }

    /// Returns the `i`-th of `count + 1` evenly spaced parameters.
    ///
    /// The last parameter is exactly `t_max`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn parameter_at(&self, i: usize, count: usize) -> f64 {
        if i >= count {
            return self.t_max;
        }
        let step = self.span() / count as f64;
        self.t_min + i as f64 * step
    }
}

impl Default for CurveDomain {
    fn default() -> Self {
        Self::UNIT
    }
}

/// A planar curve given as a pair of coordinate functions of `t`.
///
/// Implementations must be deterministic and free of side effects: the
/// sampler may evaluate them many times per frame.
pub trait ParametricFunction {
    /// The x coordinate at `t`.
    fn x(&self, t: f64) -> f64;

    /// The y coordinate at `t`.
    fn y(&self, t: f64) -> f64;

    /// The point at `t`, or `None` if either coordinate is not finite.
    fn evaluate(&self, t: f64) -> Option<Point2> {
        let p = Point2::new(self.x(t), self.y(t));
        vec2::is_finite(&p).then_some(p)
    }
}

/// A [`ParametricFunction`] built from two closures.
#[derive(Clone, Copy)]
pub struct FnCurve<X, Y> {
    fun_x: X,
    fun_y: Y,
}

impl<X, Y> FnCurve<X, Y>
where
    X: Fn(f64) -> f64,
    Y: Fn(f64) -> f64,
{
    /// Wraps `fun_x` and `fun_y` as a parametric curve.
    #[must_use]
    pub fn new(fun_x: X, fun_y: Y) -> Self {
        Self { fun_x, fun_y }
    }
}

impl<X, Y> ParametricFunction for FnCurve<X, Y>
where
    X: Fn(f64) -> f64,
    Y: Fn(f64) -> f64,
{
    fn x(&self, t: f64) -> f64 {
        (self.fun_x)(t)
    }

    fn y(&self, t: f64) -> f64 {
        (self.fun_y)(t)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn domain_swaps_inverted_bounds() {
        let d = CurveDomain::new(3.0, -1.0).unwrap();
        assert!((d.t_min() + 1.0).abs() < f64::EPSILON);
        assert!((d.t_max() - 3.0).abs() < f64::EPSILON);
        assert!((d.span() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn domain_rejects_degenerate_and_non_finite() {
        assert!(CurveDomain::new(1.0, 1.0).is_err());
        assert!(CurveDomain::new(0.0, f64::INFINITY).is_err());
        assert!(CurveDomain::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn domain_rejects_overflowing_span() {
        assert!(CurveDomain::new(-1e308, 1e308).is_err());
        assert!(CurveDomain::new(f64::MAX, -f64::MAX).is_err());

        let wide = CurveDomain::new(-1e307, 1e307).unwrap();
        assert!(wide.span().is_finite());
        assert!((wide.parameter_at(0, 4) + 1e307).abs() < f64::EPSILON);
        assert!((0..=4).all(|i| wide.parameter_at(i, 4).is_finite()));
    }

    #[test]
    fn parameter_at_hits_both_ends() {
        let d = CurveDomain::new(-2.0, 5.0).unwrap();
        assert!((d.parameter_at(0, 7) + 2.0).abs() < f64::EPSILON);
        assert!((d.parameter_at(3, 7) - 1.0).abs() < 1e-12);
        assert!((d.parameter_at(7, 7) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn fn_curve_evaluates_closures() {
        let c = FnCurve::new(|t: f64| 2.0 * t, |t: f64| t * t);
        assert_eq!(c.evaluate(3.0), Some(Point2::new(6.0, 9.0)));
    }

    #[test]
    fn non_finite_evaluation_is_none() {
        let c = FnCurve::new(|t: f64| 1.0 / t, |t: f64| t);
        assert!(c.evaluate(0.0).is_none());
        assert!(c.evaluate(2.0).is_some());
    }
}
