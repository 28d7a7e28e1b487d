//! Match a spot against a sampled ring circumference.
//!
//! The matching strategy is a trait so callers can swap in an accelerated
//! implementation without touching the detection loop. Two strategies are
//! provided: a plain linear scan, and the same scan behind an exact radial
//! pre-filter that skips spots which cannot possibly match.

use crate::Spot;

/// A spot matched to its nearest sampled ring point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingMatch {
    /// The query spot, unmodified.
    pub spot: Spot,
    /// The winning ring point, rounded to 2 decimal places.
    pub ring_point: Spot,
    /// Distance between the spot and the (unrounded) winning ring point,
    /// in pixels. Always strictly below the match threshold.
    pub distance: f64,
}

/// Strategy for matching one spot against a ring-point sequence.
///
/// Implementations must be pure: no mutation of inputs, identical output
/// for identical input. `None` means no ring point came strictly within
/// `threshold` of the spot; that is a normal outcome, not an error.
pub trait SpotMatcher {
    fn match_spot(&self, spot: Spot, ring_points: &[Spot], threshold: f64) -> Option<RingMatch>;
}

// ── Linear scan ─────────────────────────────────────────────────────────────

/// Scan every sampled ring point in sequence order.
///
/// The running best distance is seeded at the threshold itself, so a ring
/// point at exactly the threshold can never win. The strict `<` update
/// means ties are kept by the earliest-indexed sample, which matters for
/// reproducibility when two samples are equidistant to machine precision.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceMatcher;

impl SpotMatcher for BruteForceMatcher {
    fn match_spot(&self, spot: Spot, ring_points: &[Spot], threshold: f64) -> Option<RingMatch> {
        let mut best: Option<RingMatch> = None;
        let mut best_distance = threshold;
        for point in ring_points {
            let distance = spot.distance(point);
            if distance < best_distance {
                best_distance = distance;
                best = Some(RingMatch {
                    spot,
                    ring_point: point.rounded(2),
                    distance,
                });
            }
        }
        best
    }
}

// ── Radial pre-filter ───────────────────────────────────────────────────────

/// Linear scan behind an exact radial pre-filter.
///
/// `|distance(spot, center) − radius|` is the distance from the spot to the
/// nearest point of the continuous circle, which lower-bounds the distance
/// to every sampled point. Spots whose bound is at or beyond the threshold
/// are rejected without touching the sample sequence; all other spots fall
/// through to the full scan. The produced matches are therefore identical
/// to [`BruteForceMatcher`] on the same inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrefilterMatcher {
    center: Spot,
    radius: f64,
}

impl PrefilterMatcher {
    /// `center` and `radius` must describe the same circle the ring-point
    /// sequence was sampled from, or the bound no longer holds.
    pub fn new(center: Spot, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl SpotMatcher for PrefilterMatcher {
    fn match_spot(&self, spot: Spot, ring_points: &[Spot], threshold: f64) -> Option<RingMatch> {
        let bound = (spot.distance(&self.center) - self.radius).abs();
        if bound >= threshold {
            return None;
        }
        BruteForceMatcher.match_spot(spot, ring_points, threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_globally_closest_ring_point() {
        let ring_points = [
            Spot::new(0.0, 50.0),
            Spot::new(0.0, 10.0),
            Spot::new(0.0, 30.0),
        ];
        let m = BruteForceMatcher
            .match_spot(Spot::new(0.0, 0.0), &ring_points, 100.0)
            .unwrap();
        assert_eq!(m.ring_point, Spot::new(0.0, 10.0));
        assert_eq!(m.distance, 10.0);
    }

    #[test]
    fn threshold_boundary_is_strict() {
        let ring_points = [Spot::new(0.0, 100.0)];
        let query = Spot::new(0.0, 0.0);
        // Exactly at the threshold: no match.
        assert!(BruteForceMatcher
            .match_spot(query, &ring_points, 100.0)
            .is_none());
        // Strictly inside: match.
        let m = BruteForceMatcher
            .match_spot(query, &ring_points, 100.001)
            .unwrap();
        assert_eq!(m.distance, 100.0);
    }

    #[test]
    fn ties_favor_the_earlier_sample() {
        let ring_points = [Spot::new(0.0, 1.0), Spot::new(0.0, -1.0)];
        let m = BruteForceMatcher
            .match_spot(Spot::new(0.0, 0.0), &ring_points, 100.0)
            .unwrap();
        assert_eq!(m.ring_point, Spot::new(0.0, 1.0));
    }

    #[test]
    fn empty_sequence_never_matches() {
        assert!(BruteForceMatcher
            .match_spot(Spot::new(0.0, 0.0), &[], 100.0)
            .is_none());
    }

    #[test]
    fn ring_point_is_rounded_to_two_decimals() {
        let ring_points = [Spot::new(3.14159, 2.71828)];
        let m = BruteForceMatcher
            .match_spot(Spot::new(3.0, 3.0), &ring_points, 100.0)
            .unwrap();
        assert_eq!(m.ring_point, Spot::new(3.14, 2.72));
        // The spot itself is never rounded.
        assert_eq!(m.spot, Spot::new(3.0, 3.0));
    }

    #[test]
    fn prefilter_rejects_spots_far_from_the_band() {
        let center = Spot::new(0.0, 0.0);
        let ring_points = [Spot::new(0.0, 1000.0)];
        let matcher = PrefilterMatcher::new(center, 1000.0);
        // 500 px inside the ring: bound 500 >= 100, rejected.
        assert!(matcher
            .match_spot(Spot::new(0.0, 500.0), &ring_points, 100.0)
            .is_none());
        // 1 px off the ring: falls through and matches.
        let m = matcher
            .match_spot(Spot::new(0.0, 999.0), &ring_points, 100.0)
            .unwrap();
        assert_eq!(m.distance, 1.0);
    }
}
