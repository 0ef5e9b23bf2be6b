use crate::math::{vec2, Point2};

use super::ParametricFunction;

/// Evaluates the cubic Bézier curve with control points `p0..p3` at `t`.
///
/// `B(t) = (1-t)^3 p0 + 3(1-t)^2 t p1 + 3(1-t) t^2 p2 + t^3 p3`.
/// Values of `t` outside `[0, 1]` extrapolate the polynomial.
#[must_use]
pub fn bezier_point(p0: &Point2, p1: &Point2, p2: &Point2, p3: &Point2, t: f64) -> Point2 {
    let mt = 1.0 - t;
    let b0 = mt * mt * mt;
    let b1 = 3.0 * mt * mt * t;
    let b2 = 3.0 * mt * t * t;
    let b3 = t * t * t;
    Point2::new(
        b0 * p0.x + b1 * p1.x + b2 * p2.x + b3 * p3.x,
        b0 * p0.y + b1 * p1.y + b2 * p2.y + b3 * p3.y,
    )
}

/// A cubic Bézier control polygon.
///
/// `p0` and `p3` are the endpoints of the curve; `p1` and `p2` shape it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub p0: Point2,
    pub p1: Point2,
    pub p2: Point2,
    pub p3: Point2,
}

impl CubicBezier {
    #[must_use]
    pub fn new(p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Evaluates the curve at `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        bezier_point(&self.p0, &self.p1, &self.p2, &self.p3, t)
    }

    /// The control points in order.
    #[must_use]
    pub fn control_points(&self) -> [Point2; 4] {
        [self.p0, self.p1, self.p2, self.p3]
    }

    /// Returns control point `index` (0..=3).
    #[must_use]
    pub fn point(&self, index: usize) -> Option<Point2> {
        self.control_points().get(index).copied()
    }

    /// Returns a mutable reference to control point `index` (0..=3).
    pub fn point_mut(&mut self, index: usize) -> Option<&mut Point2> {
        match index {
            0 => Some(&mut self.p0),
            1 => Some(&mut self.p1),
            2 => Some(&mut self.p2),
            3 => Some(&mut self.p3),
            _ => None,
        }
    }
}

impl From<[Point2; 4]> for CubicBezier {
    fn from([p0, p1, p2, p3]: [Point2; 4]) -> Self {
        Self { p0, p1, p2, p3 }
    }
}

impl ParametricFunction for CubicBezier {
    fn x(&self, t: f64) -> f64 {
        self.point_at(t).x
    }

    fn y(&self, t: f64) -> f64 {
        self.point_at(t).y
    }

    fn evaluate(&self, t: f64) -> Option<Point2> {
        let p = self.point_at(t);
        vec2::is_finite(&p).then_some(p)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn arch() -> CubicBezier {
        CubicBezier::new(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 100.0),
            Point2::new(100.0, 100.0),
            Point2::new(100.0, 0.0),
        )
    }

    #[test]
    fn interpolates_endpoints() {
        let samples = [
            arch(),
            CubicBezier::new(
                Point2::new(-3.5, 7.0),
                Point2::new(12.0, -40.0),
                Point2::new(0.25, 0.0),
                Point2::new(9.0, 9.0),
            ),
        ];
        for c in samples {
            assert_eq!(c.point_at(0.0), c.p0);
            assert_eq!(c.point_at(1.0), c.p3);
        }
    }

    #[test]
    fn arch_midpoint() {
        let p = arch().point_at(0.5);
        assert_relative_eq!(p.x, 50.0);
        assert_relative_eq!(p.y, 75.0);
    }

    #[test]
    fn extrapolates_outside_unit_interval() {
        // A straight, evenly parameterised cubic keeps extrapolating linearly.
        let c = CubicBezier::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(3.0, 0.0),
        );
        assert_relative_eq!(c.point_at(2.0).x, 6.0, epsilon = 1e-12);
        assert_relative_eq!(c.point_at(-1.0).x, -3.0, epsilon = 1e-12);
    }

    #[test]
    fn reads_current_control_points() {
        let mut c = arch();
        let before = c.point_at(0.5);
        *c.point_mut(1).unwrap() = Point2::new(0.0, 200.0);
        let after = c.point_at(0.5);
        assert!(after.y > before.y);
        assert_eq!(c.point(1), Some(Point2::new(0.0, 200.0)));
        assert!(c.point(4).is_none());
        assert!(c.point_mut(4).is_none());
    }

    #[test]
    fn acts_as_parametric_function() {
        let c = arch();
        let p = c.evaluate(0.25).unwrap();
        assert_relative_eq!(p.x, c.x(0.25));
        assert_relative_eq!(p.y, c.y(0.25));
    }
}
