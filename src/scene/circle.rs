use crate::error::{GeometryError, Result, SceneError};
use crate::math::distance_2d::point_to_circle_dist;
use crate::math::{vec2, Point2, Vector2, HIT_TOLERANCE, TOLERANCE};
use crate::render::{stroke_circle, Style, Surface};

use super::{ControlSlot, DrawOutcome, Shape};

/// A circle with a draggable center and a radius handle.
///
/// The radius handle sits at `center + (0, radius)`; dragging it sets the
/// radius to the distance between the pointer and the center.
#[derive(Debug, Clone)]
pub struct Circle {
    center: Point2,
    radius: f64,
    style: Style,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the center is not finite or the radius is not
    /// positive and finite.
    pub fn new(center: Point2, radius: f64, style: Style) -> Result<Self> {
        let center = vec2::ensure_finite(&center)?;
        let radius = validate_radius(radius)?;
        tracing::debug!(?center, radius, "creating circle");
        Ok(Self {
            center,
            radius,
            style,
        })
    }

    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Sets the radius, keeping the previous one on invalid input.
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` is not positive and finite.
    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        self.radius = validate_radius(radius).inspect_err(|e| {
            tracing::warn!(radius, error = %e, "rejected circle radius");
        })?;
        Ok(())
    }
}

fn validate_radius(radius: f64) -> Result<f64> {
    if radius < TOLERANCE || !radius.is_finite() {
        return Err(GeometryError::Degenerate("circle radius must be positive".into()).into());
    }
    Ok(radius)
}

impl Shape for Circle {
    fn draw(&self, surface: &mut dyn Surface) -> Result<DrawOutcome> {
        stroke_circle(surface, self.center, self.radius, &self.style);
        Ok(DrawOutcome::Complete)
    }

    /// Hit when the distance to the center is within
    /// `[radius - HIT_TOLERANCE, radius + HIT_TOLERANCE]`.
    fn is_hit(&self, position: &Point2) -> Result<bool> {
        Ok(point_to_circle_dist(position, &self.center, self.radius) <= HIT_TOLERANCE)
    }

    fn control_slots(&self) -> Vec<ControlSlot> {
        vec![ControlSlot::Point(0), ControlSlot::Radius]
    }

    fn control_point(&self, slot: ControlSlot) -> Option<Point2> {
        match slot {
            ControlSlot::Point(0) => Some(self.center),
            ControlSlot::Radius => Some(self.center + Vector2::new(0.0, self.radius)),
            ControlSlot::Point(_) => None,
        }
    }

    fn set_control_point(&mut self, slot: ControlSlot, position: Point2) -> Result<()> {
        let position = vec2::ensure_finite(&position)?;
        match slot {
            ControlSlot::Point(0) => self.center = position,
            ControlSlot::Radius => self.radius = validate_radius((position - self.center).norm())?,
            ControlSlot::Point(_) => return Err(SceneError::InvalidSlot(slot.to_string()).into()),
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
