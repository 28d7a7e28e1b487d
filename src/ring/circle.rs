//! Discretize a ring circumference into an ordered point sequence.
//!
//! A sampled circle stands in for continuous distance-to-circle
//! computation: a spot is "on" the ring when it is close to any sampled
//! point. Sampling is deterministic and side-effect free, so one sequence
//! is built per radius and reused for every spot.

use anyhow::{bail, Result};

use crate::Spot;

/// The angle domain swept by the sampler. Steps are taken over
/// `[0, 361)`, so a unit step yields 361 samples (0 through 360
/// inclusive) and a quarter step yields 1444.
const ANGLE_DOMAIN: f64 = 361.0;

/// Angular step size for circumference sampling.
///
/// Note: step values are interpreted directly as **radians**, so a unit
/// step winds around the circle roughly 57 times with an uneven azimuthal
/// distribution. Degrees look intended, but the distance thresholds in use
/// were tuned against this exact point set, so the behavior is kept
/// bit-for-bit rather than corrected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleSampling {
    /// Step between consecutive sample angles, in radians. Must be
    /// positive and finite.
    pub step: f64,
}

impl CircleSampling {
    /// Unit-step sampling: 361 samples.
    pub fn coarse() -> Self {
        Self { step: 1.0 }
    }

    /// Quarter-step sampling: 1444 samples. The default.
    pub fn fine() -> Self {
        Self { step: 0.25 }
    }

    /// Number of points a circle sampled at this density will contain.
    pub fn sample_count(&self) -> usize {
        (ANGLE_DOMAIN / self.step).ceil() as usize
    }
}

impl Default for CircleSampling {
    fn default() -> Self {
        Self::fine()
    }
}

/// Sample the circumference of the circle with the given center and
/// radius.
///
/// Each sample is `(r·sin(a) + cx, r·cos(a) + cy)` for angles
/// `a = k·step`, `k = 0..sample_count`. The sequence is ordered by `k` and
/// never empty; index 0 is always `(cx, cy + r)`.
///
/// Fails for a radius that is not positive and finite, or a degenerate
/// step; the matcher must never see a degenerate circle.
pub fn sample_circle(center: Spot, radius: f64, sampling: CircleSampling) -> Result<Vec<Spot>> {
    if !radius.is_finite() || radius <= 0.0 {
        bail!("invalid ring radius {radius}: must be positive and finite");
    }
    if !sampling.step.is_finite() || sampling.step <= 0.0 {
        bail!(
            "invalid sampling step {}: must be positive and finite",
            sampling.step
        );
    }

    let points = (0..sampling.sample_count())
        .map(|k| {
            let angle = k as f64 * sampling.step;
            let (sin, cos) = angle.sin_cos();
            Spot::new(radius * sin + center.x, radius * cos + center.y)
        })
        .collect();
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Spot = Spot { x: 1600.0, y: 1600.0 };

    #[test]
    fn coarse_sampling_yields_361_points() {
        let points = sample_circle(CENTER, 1200.0, CircleSampling::coarse()).unwrap();
        assert_eq!(points.len(), 361);
    }

    #[test]
    fn fine_sampling_yields_1444_points() {
        let points = sample_circle(CENTER, 1200.0, CircleSampling::fine()).unwrap();
        assert_eq!(points.len(), 1444);
    }

    #[test]
    fn first_sample_is_top_of_circle() {
        // angle 0: sin = 0, cos = 1
        let points = sample_circle(CENTER, 1000.0, CircleSampling::coarse()).unwrap();
        assert_eq!(points[0], Spot::new(1600.0, 2600.0));
    }

    #[test]
    fn all_samples_lie_on_the_circle() {
        for &radius in &[1200.0, 1400.0, 1600.0, 1800.0] {
            let points = sample_circle(CENTER, radius, CircleSampling::fine()).unwrap();
            for p in &points {
                let err = (p.distance(&CENTER) - radius).abs();
                assert!(err < 1e-6, "r={radius}, point {p:?} off by {err}");
            }
        }
    }

    #[test]
    fn sampling_is_deterministic() {
        let a = sample_circle(CENTER, 1400.0, CircleSampling::fine()).unwrap();
        let b = sample_circle(CENTER, 1400.0, CircleSampling::fine()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_degenerate_radii() {
        for radius in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            assert!(
                sample_circle(CENTER, radius, CircleSampling::fine()).is_err(),
                "radius {radius} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_degenerate_step() {
        let sampling = CircleSampling { step: 0.0 };
        assert!(sample_circle(CENTER, 1200.0, sampling).is_err());
    }
}
