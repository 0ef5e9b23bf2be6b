use std::fmt;

use crate::error::{Result, SceneError};
use crate::geometry::{CurveDomain, ParametricFunction, SampledCurve};
use crate::math::Point2;
use crate::render::{Style, Surface};

use super::{ControlSlot, DrawOutcome, SamplingConfig, Shape};

type CoordinateFn = Box<dyn Fn(f64) -> f64>;

/// A curve `t ↦ (x(t), y(t))` drawn as a sampled polyline.
///
/// Has no control points; it is edited through its functions and its
/// [`SamplingConfig`].
pub struct ParametricCurve {
    fun_x: CoordinateFn,
    fun_y: CoordinateFn,
    sampling: SamplingConfig,
    style: Style,
}

impl ParametricCurve {
    /// Creates a new parametric curve over `domain`.
    ///
    /// # Errors
    ///
    /// Returns an error if `segment_count` is zero.
    pub fn new<X, Y>(fun_x: X, fun_y: Y, domain: CurveDomain, segment_count: usize) -> Result<Self>
    where
        X: Fn(f64) -> f64 + 'static,
        Y: Fn(f64) -> f64 + 'static,
    {
        let sampling = SamplingConfig::new(domain, segment_count)?;
        tracing::debug!(
            t_min = domain.t_min(),
            t_max = domain.t_max(),
            segment_count,
            "creating parametric curve"
        );
        Ok(Self {
            fun_x: Box::new(fun_x),
            fun_y: Box::new(fun_y),
            sampling,
            style: Style::default(),
        })
    }

    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_tickmarks(mut self, enabled: bool) -> Self {
        self.sampling.set_tickmarks(enabled);
        self
    }

    /// Replaces the x coordinate function.
    pub fn set_fun_x(&mut self, fun_x: impl Fn(f64) -> f64 + 'static) {
        self.fun_x = Box::new(fun_x);
    }

    /// Replaces the y coordinate function.
    pub fn set_fun_y(&mut self, fun_y: impl Fn(f64) -> f64 + 'static) {
        self.fun_y = Box::new(fun_y);
    }

    #[must_use]
    pub fn sampling(&self) -> &SamplingConfig {
        &self.sampling
    }

    pub fn sampling_mut(&mut self) -> &mut SamplingConfig {
        &mut self.sampling
    }

    /// Samples the curve with its current functions and settings.
    ///
    /// # Errors
    ///
    /// Returns an error if sampling fails.
    pub fn sample(&self) -> Result<SampledCurve> {
        self.sampling.sample(self, self.style)
    }
}

impl fmt::Debug for ParametricCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParametricCurve")
            .field("sampling", &self.sampling)
            .field("style", &self.style)
            .finish_non_exhaustive()
    }
}

impl ParametricFunction for ParametricCurve {
    fn x(&self, t: f64) -> f64 {
        (self.fun_x)(t)
    }

    fn y(&self, t: f64) -> f64 {
        (self.fun_y)(t)
    }
}

impl Shape for ParametricCurve {
    fn draw(&self, surface: &mut dyn Surface) -> Result<DrawOutcome> {
        self.sampling.draw(self, self.style, surface)
    }

    fn is_hit(&self, position: &Point2) -> Result<bool> {
        self.sampling.is_hit(self, position)
    }

    fn control_slots(&self) -> Vec<ControlSlot> {
        Vec::new()
    }

    fn control_point(&self, _slot: ControlSlot) -> Option<Point2> {
        None
    }

    fn set_control_point(&mut self, slot: ControlSlot, _position: Point2) -> Result<()> {
        Err(SceneError::InvalidSlot(slot.to_string()).into())
    }

    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }
}
