use crate::error::{Result, SamplingError};
use crate::math::Point2;
use crate::render::{Style, Surface};

use super::segment::{self, LineSegment};
use super::{CurveDomain, ParametricFunction};

/// Segment count used when a curve is created without one.
pub const DEFAULT_SEGMENT_COUNT: usize = 20;

/// Largest segment count a sampling pass accepts.
pub const MAX_SEGMENT_COUNT: usize = 100_000;

/// One evaluated parameter value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// The parameter the function was evaluated at.
    pub t: f64,
    /// The curve point, or `None` where the function was not finite.
    pub point: Option<Point2>,
}

/// A piecewise-linear approximation of a parametric curve.
///
/// `samples` holds `segment_count + 1` entries with
/// `samples[i].t = t_min + i * (t_max - t_min) / segment_count`.
/// `segments` connects every pair of consecutive samples where both
/// points are present.
#[derive(Debug, Clone)]
pub struct SampledCurve {
    domain: CurveDomain,
    segment_count: usize,
    samples: Vec<Sample>,
    segments: Vec<LineSegment>,
}

impl SampledCurve {
    #[must_use]
    pub fn domain(&self) -> CurveDomain {
        self.domain
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// All samples in parameter order, gaps included.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Segments between consecutive valid samples, in parameter order.
    #[must_use]
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    /// Iterates over the valid sample points.
    pub fn points(&self) -> impl Iterator<Item = Point2> + '_ {
        self.samples.iter().filter_map(|s| s.point)
    }

    /// Number of samples where the function was not finite.
    #[must_use]
    pub fn gap_count(&self) -> usize {
        self.samples.iter().filter(|s| s.point.is_none()).count()
    }

    /// Returns `true` if some samples had to be skipped.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.samples.iter().any(|s| s.point.is_none())
    }

    /// Hit-tests `position` against the sampled segments.
    #[must_use]
    pub fn is_hit(&self, position: &Point2, tolerance: f64) -> bool {
        segment::is_hit(&self.segments, position, tolerance)
    }

    /// Strokes each unbroken run of samples as one path with `style`.
    pub fn draw(&self, surface: &mut dyn Surface, style: &Style) {
        let mut run_len = 0usize;
        for sample in &self.samples {
            match sample.point {
                Some(p) if run_len == 0 => {
                    surface.begin_path();
                    surface.move_to(p);
                    run_len = 1;
                }
                Some(p) => {
                    surface.line_to(p);
                    run_len += 1;
                }
                None => {
                    finish_run(surface, style, run_len);
                    run_len = 0;
                }
            }
        }
        finish_run(surface, style, run_len);
    }
}

fn finish_run(surface: &mut dyn Surface, style: &Style, run_len: usize) {
    if run_len == 0 {
        return;
    }
    surface.set_line_width(style.width());
    surface.set_stroke_color(style.color());
    surface.stroke();
}

/// Samples a parametric function into a [`SampledCurve`].
///
/// Walks the domain forward in `segment_count` equal steps, evaluating the
/// function once per parameter. Non-finite values become gaps instead of
/// failing the whole pass. No state is kept between runs.
pub struct SampleCurve<'a, F: ?Sized> {
    function: &'a F,
    domain: CurveDomain,
    segment_count: usize,
    style: Style,
}

impl<'a, F: ParametricFunction + ?Sized> SampleCurve<'a, F> {
    /// Creates a new `SampleCurve` operation.
    #[must_use]
    pub fn new(function: &'a F, domain: CurveDomain, segment_count: usize) -> Self {
        Self {
            function,
            domain,
            segment_count,
            style: Style::default(),
        }
    }

    /// Sets the style carried by the produced segments.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Executes the sampling.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment count is zero or exceeds
    /// [`MAX_SEGMENT_COUNT`].
    pub fn execute(&self) -> Result<SampledCurve> {
        let n = self.segment_count;
        if n == 0 {
            return Err(SamplingError::ZeroSegments.into());
        }
        if n > MAX_SEGMENT_COUNT {
            return Err(SamplingError::TooManySegments {
                count: n,
                max: MAX_SEGMENT_COUNT,
            }
            .into());
        }

        let samples: Vec<Sample> = (0..=n)
            .map(|i| {
                let t = self.domain.parameter_at(i, n);
                Sample {
                    t,
                    point: self.function.evaluate(t),
                }
            })
            .collect();

        let segments: Vec<LineSegment> = samples
            .windows(2)
            .filter_map(|pair| match (pair[0].point, pair[1].point) {
                (Some(a), Some(b)) => Some(LineSegment::new(a, b, self.style)),
                _ => None,
            })
            .collect();

        let curve = SampledCurve {
            domain: self.domain,
            segment_count: n,
            samples,
            segments,
        };

        if curve.is_partial() {
            tracing::warn!(
                gaps = curve.gap_count(),
                samples = n + 1,
                "parametric function was not finite at some samples"
            );
        }

        Ok(curve)
    }
}
