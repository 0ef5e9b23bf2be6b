use crate::error::{Result, SceneError};
use crate::geometry::{CubicBezier, SampledCurve};
use crate::math::{vec2, Point2};
use crate::render::{Color, Style, Surface};

use super::{ControlPolygon, ControlSlot, DrawOutcome, SamplingConfig, Shape, ShapeId};

/// Default Bézier curve stroke.
pub const BEZIER_STYLE: Style = Style::preset(2.0, Color::rgb(0x00, 0x00, 0xaa));

/// A cubic Bézier curve with four draggable control points.
///
/// Every evaluation reads the current control points, so a handle move is
/// visible on the next draw without rebuilding the curve.
#[derive(Debug, Clone)]
pub struct BezierCurve {
    curve: CubicBezier,
    sampling: SamplingConfig,
    style: Style,
}

impl BezierCurve {
    /// Creates a Bézier curve sampled over `[0, 1]` with default settings.
    #[must_use]
    pub fn new(curve: CubicBezier) -> Self {
        tracing::debug!(points = ?curve.control_points(), "creating bezier curve");
        Self {
            curve,
            sampling: SamplingConfig::default(),
            style: BEZIER_STYLE,
        }
    }

    #[must_use]
    pub fn with_sampling(mut self, sampling: SamplingConfig) -> Self {
        self.sampling = sampling;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// The current control polygon.
    #[must_use]
    pub fn curve(&self) -> &CubicBezier {
        &self.curve
    }

    /// Evaluates the curve at `t` from the current control points.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.curve.point_at(t)
    }

    #[must_use]
    pub fn sampling(&self) -> &SamplingConfig {
        &self.sampling
    }

    pub fn sampling_mut(&mut self) -> &mut SamplingConfig {
        &mut self.sampling
    }

    /// Samples the curve with its current control points and settings.
    ///
    /// # Errors
    ///
    /// Returns an error if sampling fails.
    pub fn sample(&self) -> Result<SampledCurve> {
        self.sampling.sample(&self.curve, self.style)
    }
}

impl Shape for BezierCurve {
    fn draw(&self, surface: &mut dyn Surface) -> Result<DrawOutcome> {
        self.sampling.draw(&self.curve, self.style, surface)
    }

    fn is_hit(&self, position: &Point2) -> Result<bool> {
        self.sampling.is_hit(&self.curve, position)
    }

    fn control_slots(&self) -> Vec<ControlSlot> {
        (0..4).map(ControlSlot::Point).collect()
    }

    fn control_point(&self, slot: ControlSlot) -> Option<Point2> {
        match slot {
            ControlSlot::Point(i) => self.curve.point(i),
            ControlSlot::Radius => None,
        }
    }

    fn set_control_point(&mut self, slot: ControlSlot, position: Point2) -> Result<()> {
        let position = vec2::ensure_finite(&position)?;
        let target = match slot {
            ControlSlot::Point(i) => self.curve.point_mut(i),
            ControlSlot::Radius => None,
        };
        let target = target.ok_or_else(|| SceneError::InvalidSlot(slot.to_string()))?;
        *target = position;
        Ok(())
    }

    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    fn control_polygon(&self, id: ShapeId) -> Option<ControlPolygon> {
        Some(ControlPolygon::new(id))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::render::RecordingSurface;

    fn arch() -> BezierCurve {
        BezierCurve::new(CubicBezier::new(
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 100.0),
            Point2::new(100.0, 100.0),
            Point2::new(100.0, 0.0),
        ))
    }

    #[test]
    fn default_sampling_over_unit_interval() {
        let c = arch();
        let curve = c.sample().unwrap();
        assert_eq!(curve.samples().len(), crate::geometry::DEFAULT_SEGMENT_COUNT + 1);
        assert_eq!(curve.samples()[0].point, Some(Point2::new(0.0, 0.0)));
        assert_eq!(curve.samples().last().unwrap().point, Some(Point2::new(100.0, 0.0)));
    }

    #[test]
    fn control_point_changes_show_on_next_sample() {
        let mut c = arch();
        let before = c.sample().unwrap();
        c.set_control_point(ControlSlot::Point(3), Point2::new(200.0, 0.0)).unwrap();
        let after = c.sample().unwrap();
        assert_ne!(before.samples(), after.samples());
        assert_eq!(after.samples().last().unwrap().point, Some(Point2::new(200.0, 0.0)));
    }

    #[test]
    fn invalid_slots_rejected() {
        let mut c = arch();
        assert!(c.set_control_point(ControlSlot::Point(4), Point2::origin()).is_err());
        assert!(c.set_control_point(ControlSlot::Radius, Point2::origin()).is_err());
        assert!(c
            .set_control_point(ControlSlot::Point(1), Point2::new(0.0, f64::NAN))
            .is_err());
        assert_eq!(c.curve().p1, Point2::new(0.0, 100.0));
    }

    #[test]
    fn hit_near_the_curve_only() {
        let c = arch();
        assert!(c.is_hit(&Point2::new(50.0, 75.0)).unwrap());
        assert!(!c.is_hit(&Point2::new(50.0, 30.0)).unwrap());
    }

    #[test]
    fn draw_with_tickmarks() {
        let mut c = arch();
        c.sampling_mut().set_segment_count(4).unwrap();
        c.sampling_mut().set_tickmarks(true);
        let mut surface = RecordingSurface::new();
        assert!(c.draw(&mut surface).unwrap().is_complete());
        assert_eq!(surface.stroke_count(), 1 + 3);
    }

    #[test]
    fn exposes_control_polygon_and_four_handles() {
        let mut store = crate::scene::ShapeStore::new();
        let id = store.add(arch());
        assert_eq!(store.handles(id).unwrap().len(), 4);
        assert!(store.control_polygon(id).unwrap().is_some());
    }
}
