use crate::math::{vec2, Point2};
use crate::render::{Color, Style, Surface};

use super::sampler::Sample;
use super::LineSegment;

/// Half the length of a tick mark, in surface units.
pub const TICK_HALF_LENGTH: f64 = 6.0;

/// Default tick mark stroke.
pub const TICK_STYLE: Style = Style::preset(1.0, Color::rgb(0xdf, 0x01, 0x3a));

/// A short segment across the curve at a sample point, along the local normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    center: Point2,
    segment: LineSegment,
}

impl TickMark {
    /// The sample point the tick straddles.
    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    #[must_use]
    pub fn segment(&self) -> &LineSegment {
        &self.segment
    }

    /// Returns the same tick mark drawn with `style`.
    #[must_use]
    pub fn with_style(self, style: Style) -> Self {
        Self {
            center: self.center,
            segment: LineSegment::new(self.segment.start(), self.segment.end(), style),
        }
    }

    pub fn draw(&self, surface: &mut dyn Surface) {
        self.segment.draw(surface);
    }
}

/// Builds tick marks at the interior samples of a sampled curve.
///
/// The tangent at sample `i` is the centered difference
/// `samples[i + 1] - samples[i - 1]`, normalised; the tick runs along its
/// left normal from `center - normal * half_length` to
/// `center + normal * half_length`. The first and last samples are skipped,
/// as are samples next to a gap or whose neighbours coincide.
#[must_use]
pub fn generate_tick_marks(samples: &[Sample], half_length: f64) -> Vec<TickMark> {
    samples
        .windows(3)
        .filter_map(|w| {
            let (prev, center, next) = (w[0].point?, w[1].point?, w[2].point?);
            let tangent = vec2::try_normalize(&(next - prev))?;
            let normal = vec2::perpendicular(&tangent) * half_length;
            Some(TickMark {
                center,
                segment: LineSegment::new(center - normal, center + normal, TICK_STYLE),
            })
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{CurveDomain, FnCurve, SampleCurve};
    use crate::math::TOLERANCE;

    fn sample(t: f64, x: f64, y: f64) -> Sample {
        Sample {
            t,
            point: Some(Point2::new(x, y)),
        }
    }

    #[test]
    fn skips_first_and_last_sample() {
        let samples = [
            sample(0.0, 0.0, 0.0),
            sample(0.5, 1.0, 0.0),
            sample(1.0, 2.0, 0.0),
        ];
        let ticks = generate_tick_marks(&samples, 2.0);
        assert_eq!(ticks.len(), 1);
        assert_eq!(ticks[0].center(), Point2::new(1.0, 0.0));
    }

    #[test]
    fn tick_is_normal_and_symmetric() {
        // Horizontal curve: ticks are vertical.
        let samples = [
            sample(0.0, 0.0, 0.0),
            sample(0.5, 1.0, 0.0),
            sample(1.0, 2.0, 0.0),
        ];
        let tick = generate_tick_marks(&samples, 2.0)[0];
        let s = tick.segment();
        assert!((s.start() - Point2::new(1.0, -2.0)).norm() < TOLERANCE);
        assert!((s.end() - Point2::new(1.0, 2.0)).norm() < TOLERANCE);
        assert!((s.midpoint() - tick.center()).norm() < TOLERANCE);
        assert!((s.length() - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn tick_is_perpendicular_on_a_circle() {
        let f = FnCurve::new(f64::cos, f64::sin);
        let domain = CurveDomain::new(0.0, std::f64::consts::PI).unwrap();
        let curve = SampleCurve::new(&f, domain, 8).execute().unwrap();
        let ticks = generate_tick_marks(curve.samples(), TICK_HALF_LENGTH);
        assert_eq!(ticks.len(), 7);
        for tick in &ticks {
            // On a circle the normal is radial.
            let dir = tick.segment().end() - tick.segment().start();
            let radial = tick.center().coords;
            let cross = dir.x * radial.y - dir.y * radial.x;
            assert!(cross.abs() < 1e-9, "cross={cross}");
        }
    }

    #[test]
    fn gaps_suppress_neighbouring_ticks() {
        let samples = [
            sample(0.0, 0.0, 0.0),
            sample(0.25, 1.0, 0.0),
            Sample {
                t: 0.5,
                point: None,
            },
            sample(0.75, 3.0, 0.0),
            sample(1.0, 4.0, 0.0),
        ];
        assert!(generate_tick_marks(&samples, 1.0).is_empty());
    }

    #[test]
    fn coincident_neighbours_emit_no_tick() {
        let samples = [
            sample(0.0, 1.0, 1.0),
            sample(0.5, 1.0, 1.0),
            sample(1.0, 1.0, 1.0),
        ];
        assert!(generate_tick_marks(&samples, 1.0).is_empty());
    }

    #[test]
    fn too_few_samples() {
        assert!(generate_tick_marks(&[], 1.0).is_empty());
        assert!(generate_tick_marks(&[sample(0.0, 0.0, 0.0)], 1.0).is_empty());
    }

    #[test]
    fn restyled_tick_keeps_geometry() {
        let samples = [
            sample(0.0, 0.0, 0.0),
            sample(0.5, 1.0, 1.0),
            sample(1.0, 2.0, 0.0),
        ];
        let tick = generate_tick_marks(&samples, 1.0)[0];
        let restyled = tick.with_style(Style::default());
        assert_eq!(restyled.segment().start(), tick.segment().start());
        assert_eq!(restyled.segment().style(), &Style::default());
    }
}
