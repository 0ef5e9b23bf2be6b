use crate::error::{Result, SamplingError};
use crate::geometry::{
    generate_tick_marks, CurveDomain, ParametricFunction, SampleCurve, SampledCurve,
    DEFAULT_SEGMENT_COUNT, MAX_SEGMENT_COUNT, TICK_HALF_LENGTH,
};
use crate::math::{Point2, HIT_TOLERANCE};
use crate::render::{Style, Surface};

use super::DrawOutcome;

/// Sampling settings shared by parametric and Bézier curves.
///
/// Setters validate their input and keep the previous value on error, so
/// a config is always ready to sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingConfig {
    domain: CurveDomain,
    segment_count: usize,
    tickmarks: bool,
}

impl SamplingConfig {
    /// Creates a sampling configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `segment_count` is zero or exceeds
    /// [`MAX_SEGMENT_COUNT`].
    pub fn new(domain: CurveDomain, segment_count: usize) -> Result<Self> {
        Ok(Self {
            domain,
            segment_count: validate_segment_count(segment_count)?,
            tickmarks: false,
        })
    }

    #[must_use]
    pub fn domain(&self) -> CurveDomain {
        self.domain
    }

    /// Sets the domain bounds, swapping them if inverted.
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds are equal or not finite.
    pub fn set_domain(&mut self, t_min: f64, t_max: f64) -> Result<()> {
        self.domain = CurveDomain::new(t_min, t_max).inspect_err(|e| {
            tracing::warn!(t_min, t_max, error = %e, "rejected curve domain");
        })?;
        Ok(())
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Sets the number of line segments used to approximate the curve.
    ///
    /// # Errors
    ///
    /// Returns an error if `segment_count` is zero or exceeds
    /// [`MAX_SEGMENT_COUNT`].
    pub fn set_segment_count(&mut self, segment_count: usize) -> Result<()> {
        self.segment_count = validate_segment_count(segment_count).inspect_err(|e| {
            tracing::warn!(segment_count, error = %e, "rejected segment count");
        })?;
        Ok(())
    }

    #[must_use]
    pub fn tickmarks(&self) -> bool {
        self.tickmarks
    }

    pub fn set_tickmarks(&mut self, enabled: bool) {
        self.tickmarks = enabled;
    }

    /// Samples `function` with these settings.
    ///
    /// # Errors
    ///
    /// Returns an error if sampling fails.
    pub fn sample<F>(&self, function: &F, style: Style) -> Result<SampledCurve>
    where
        F: ParametricFunction + ?Sized,
    {
        SampleCurve::new(function, self.domain, self.segment_count)
            .with_style(style)
            .execute()
    }

    /// Samples and strokes `function`, adding tick marks when enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if sampling fails.
    pub(crate) fn draw<F>(&self, function: &F, style: Style, surface: &mut dyn Surface) -> Result<DrawOutcome>
    where
        F: ParametricFunction + ?Sized,
    {
        let curve = self.sample(function, style)?;
        curve.draw(surface, &style);

        if self.tickmarks {
            for tick in generate_tick_marks(curve.samples(), TICK_HALF_LENGTH) {
                tick.draw(surface);
            }
        }

        Ok(if curve.is_partial() {
            DrawOutcome::Partial {
                gaps: curve.gap_count(),
            }
        } else {
            DrawOutcome::Complete
        })
    }

    /// Samples `function` and hit-tests `position` against its segments.
    ///
    /// # Errors
    ///
    /// Returns an error if sampling fails.
    pub(crate) fn is_hit<F>(&self, function: &F, position: &Point2) -> Result<bool>
    where
        F: ParametricFunction + ?Sized,
    {
        Ok(self
            .sample(function, Style::default())?
            .is_hit(position, HIT_TOLERANCE))
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            domain: CurveDomain::UNIT,
            segment_count: DEFAULT_SEGMENT_COUNT,
            tickmarks: false,
        }
    }
}

fn validate_segment_count(segment_count: usize) -> Result<usize> {
    if segment_count == 0 {
        return Err(SamplingError::ZeroSegments.into());
    }
    if segment_count > MAX_SEGMENT_COUNT {
        return Err(SamplingError::TooManySegments {
            count: segment_count,
            max: MAX_SEGMENT_COUNT,
        }
        .into());
    }
    Ok(segment_count)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::FnCurve;
    use crate::render::RecordingSurface;

    #[test]
    fn zero_segments_rejected_and_previous_kept() {
        assert!(SamplingConfig::new(CurveDomain::UNIT, 0).is_err());
        let mut cfg = SamplingConfig::new(CurveDomain::UNIT, 5).unwrap();
        assert!(cfg.set_segment_count(0).is_err());
        assert_eq!(cfg.segment_count(), 5);
    }

    #[test]
    fn segment_count_is_capped() {
        assert!(SamplingConfig::new(CurveDomain::UNIT, MAX_SEGMENT_COUNT + 1).is_err());
        let mut cfg = SamplingConfig::default();
        assert!(matches!(
            cfg.set_segment_count(usize::MAX),
            Err(crate::error::CurvelisError::Sampling(SamplingError::TooManySegments { .. }))
        ));
        assert_eq!(cfg.segment_count(), DEFAULT_SEGMENT_COUNT);
        cfg.set_segment_count(MAX_SEGMENT_COUNT).unwrap();
        assert_eq!(cfg.segment_count(), MAX_SEGMENT_COUNT);
    }

    #[test]
    fn domain_is_auto_swapped() {
        let mut cfg = SamplingConfig::default();
        cfg.set_domain(4.0, -4.0).unwrap();
        assert!((cfg.domain().t_min() + 4.0).abs() < f64::EPSILON);
        assert!((cfg.domain().t_max() - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn degenerate_domain_keeps_previous() {
        let mut cfg = SamplingConfig::default();
        cfg.set_domain(-1.0, 2.0).unwrap();
        assert!(cfg.set_domain(3.0, 3.0).is_err());
        assert!(cfg.set_domain(f64::NAN, 3.0).is_err());
        assert!(cfg.set_domain(-1e308, 1e308).is_err());
        assert_eq!(cfg.domain(), CurveDomain::new(-1.0, 2.0).unwrap());
    }

    #[test]
    fn tickmarks_add_strokes() {
        let f = FnCurve::new(|t: f64| 100.0 * t, |t: f64| 10.0 * (t * 6.0).sin());
        let mut cfg = SamplingConfig::new(CurveDomain::UNIT, 10).unwrap();
        let mut plain = RecordingSurface::new();
        cfg.draw(&f, Style::default(), &mut plain).unwrap();
        assert_eq!(plain.stroke_count(), 1);

        cfg.set_tickmarks(true);
        let mut ticked = RecordingSurface::new();
        let outcome = cfg.draw(&f, Style::default(), &mut ticked).unwrap();
        assert!(outcome.is_complete());
        // One curve stroke plus one tick per interior sample.
        assert_eq!(ticked.stroke_count(), 1 + 9);
    }

    #[test]
    fn partial_draw_is_reported() {
        let f = FnCurve::new(|t: f64| t.ln(), |t: f64| t);
        let cfg = SamplingConfig::new(CurveDomain::new(-1.0, 1.0).unwrap(), 4).unwrap();
        let mut surface = RecordingSurface::new();
        let outcome = cfg.draw(&f, Style::default(), &mut surface).unwrap();
        // ln is NaN for t < 0 and -inf at 0.
        assert_eq!(outcome, DrawOutcome::Partial { gaps: 3 });
    }
}
