use crate::error::{GeometryError, Result, SceneError};
use crate::geometry::{
    is_hit, subdivide, subdivide_levels, CubicBezier, LineSegment, Subdivision, MAX_SUBDIVISION_DEPTH,
};
use crate::math::{vec2, Point2, HIT_TOLERANCE};
use crate::render::{stroke_circle, stroke_line, Color, Style, Surface};

use super::polygon::POLYGON_STYLE;
use super::{ControlPolygon, ControlSlot, DrawOutcome, Shape, ShapeId};

/// Stroke of the intermediate `a0a1`, `a1a2` and `b0b1` lines.
pub const CONSTRUCTION_STYLE: Style = Style::preset(2.0, Color::rgb(0x00, 0x00, 0xff));

/// Radius of the marker drawn at the split point `c0`.
const SPLIT_MARKER_RADIUS: f64 = 5.0;

/// Visualises de Casteljau subdivision of a control polygon.
///
/// Draws the control polygon, the child polygons of every subdivision level
/// down to `depth`, optionally the construction lines of the first level,
/// and marks the split point.
#[derive(Debug, Clone)]
pub struct CasteljauCurve {
    curve: CubicBezier,
    t: f64,
    depth: usize,
    show_construction: bool,
    style: Style,
}

impl CasteljauCurve {
    /// Creates a visualisation splitting `curve` at `t`, one level deep.
    ///
    /// # Errors
    ///
    /// Returns an error if `t` is outside `[0, 1]`.
    pub fn new(curve: CubicBezier, t: f64) -> Result<Self> {
        let t = validate_t(t)?;
        tracing::debug!(points = ?curve.control_points(), t, "creating casteljau curve");
        Ok(Self {
            curve,
            t,
            depth: 1,
            show_construction: true,
            style: POLYGON_STYLE,
        })
    }

    #[must_use]
    pub fn curve(&self) -> &CubicBezier {
        &self.curve
    }

    #[must_use]
    pub fn t(&self) -> f64 {
        self.t
    }

    /// Sets the split parameter, keeping the previous one on invalid input.
    ///
    /// # Errors
    ///
    /// Returns an error if `t` is outside `[0, 1]`.
    pub fn set_t(&mut self, t: f64) -> Result<()> {
        self.t = validate_t(t).inspect_err(|e| {
            tracing::warn!(t, error = %e, "rejected subdivision parameter");
        })?;
        Ok(())
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Sets the number of subdivision levels drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if `depth` exceeds [`crate::geometry::MAX_SUBDIVISION_DEPTH`].
    #[allow(clippy::cast_precision_loss)]
    pub fn set_depth(&mut self, depth: usize) -> Result<()> {
        if depth > MAX_SUBDIVISION_DEPTH {
            let e = GeometryError::ParameterOutOfRange {
                parameter: "depth",
                value: depth as f64,
                min: 0.0,
                max: MAX_SUBDIVISION_DEPTH as f64,
            };
            tracing::warn!(depth, error = %e, "rejected subdivision depth");
            return Err(e.into());
        }
        self.depth = depth;
        Ok(())
    }

    #[must_use]
    pub fn show_construction(&self) -> bool {
        self.show_construction
    }

    pub fn set_show_construction(&mut self, show: bool) {
        self.show_construction = show;
    }

    /// The first-level subdivision of the current control polygon.
    #[must_use]
    pub fn subdivision(&self) -> Subdivision {
        subdivide(&self.curve, self.t)
    }

    fn polygon_segments(&self) -> Vec<LineSegment> {
        self.curve
            .control_points()
            .windows(2)
            .map(|w| LineSegment::new(w[0], w[1], self.style))
            .collect()
    }
}

fn validate_t(t: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&t) {
        return Err(GeometryError::ParameterOutOfRange {
            parameter: "t",
            value: t,
            min: 0.0,
            max: 1.0,
        }
        .into());
    }
    Ok(t)
}

fn stroke_polygon(surface: &mut dyn Surface, polygon: &CubicBezier, style: &Style) {
    for edge in polygon.control_points().windows(2) {
        stroke_line(surface, edge[0], edge[1], style);
    }
}

impl Shape for CasteljauCurve {
    fn draw(&self, surface: &mut dyn Surface) -> Result<DrawOutcome> {
        let levels = subdivide_levels(&self.curve, self.t, self.depth)?;
        for level in &levels {
            for polygon in level {
                stroke_polygon(surface, polygon, &self.style);
            }
        }

        let split = self.subdivision();
        if self.show_construction {
            for (a, b) in split.construction_lines() {
                stroke_line(surface, a, b, &CONSTRUCTION_STYLE);
            }
        }
        stroke_circle(surface, split.c0, SPLIT_MARKER_RADIUS, &CONSTRUCTION_STYLE);

        Ok(DrawOutcome::Complete)
    }

    fn is_hit(&self, position: &Point2) -> Result<bool> {
        Ok(is_hit(&self.polygon_segments(), position, HIT_TOLERANCE))
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
        Some(ControlPolygon::new(id).with_style(self.style))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, RecordingSurface};
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
    fn t_is_validated() {
        assert!(CasteljauCurve::new(arch(), 1.5).is_err());
        assert!(CasteljauCurve::new(arch(), -0.1).is_err());
        let mut c = CasteljauCurve::new(arch(), 0.5).unwrap();
        assert!(c.set_t(f64::NAN).is_err());
        assert!((c.t() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn depth_is_bounded() {
        let mut c = CasteljauCurve::new(arch(), 0.5).unwrap();
        assert!(c.set_depth(MAX_SUBDIVISION_DEPTH + 1).is_err());
        assert!(c.set_depth(usize::MAX).is_err());
        assert_eq!(c.depth(), 1);
        c.set_depth(MAX_SUBDIVISION_DEPTH).unwrap();
        assert_eq!(c.depth(), MAX_SUBDIVISION_DEPTH);
        c.set_depth(0).unwrap();
        assert_eq!(c.depth(), 0);
    }

    #[test]
    fn draw_counts() {
        let mut c = CasteljauCurve::new(arch(), 0.5).unwrap();
        let mut surface = RecordingSurface::new();
        c.draw(&mut surface).unwrap();
        // 3 polygons × 3 edges, 3 construction lines, 1 split marker.
        assert_eq!(surface.stroke_count(), 9 + 3 + 1);

        c.set_show_construction(false);
        c.set_depth(2).unwrap();
        surface.clear();
        c.draw(&mut surface).unwrap();
        // 1 + 2 + 4 polygons × 3 edges, 1 split marker.
        assert_eq!(surface.stroke_count(), 21 + 1);
    }

    #[test]
    fn split_marker_at_c0() {
        let c = CasteljauCurve::new(arch(), 0.5).unwrap();
        let mut surface = RecordingSurface::new();
        c.draw(&mut surface).unwrap();
        assert!(surface.commands().iter().any(|cmd| matches!(
            cmd,
            DrawCommand::Arc { center, .. } if *center == Point2::new(50.0, 75.0)
        )));
    }

    #[test]
    fn hit_on_control_polygon() {
        let c = CasteljauCurve::new(arch(), 0.5).unwrap();
        assert!(c.is_hit(&Point2::new(2.0, 50.0)).unwrap());
        assert!(c.is_hit(&Point2::new(50.0, 100.0)).unwrap());
        assert!(!c.is_hit(&Point2::new(50.0, 50.0)).unwrap());
    }

    #[test]
    fn moving_a_control_point_moves_c0() {
        let mut c = CasteljauCurve::new(arch(), 0.5).unwrap();
        let before = c.subdivision().c0;
        c.set_control_point(ControlSlot::Point(1), Point2::new(0.0, 200.0))
            .unwrap();
        let after = c.subdivision().c0;
        assert!(after.y > before.y);
        let on_curve = c.curve().point_at(0.5);
        assert_relative_eq!(after.x, on_curve.x);
        assert_relative_eq!(after.y, on_curve.y);
    }
}
