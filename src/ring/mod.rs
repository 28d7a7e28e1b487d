//! Ice-ring detection over a field of diffraction spots.
//!
//! Crystallized ice in the sample produces diffraction artifacts that
//! concentrate near fixed resolution shells, which appear on the detector
//! as circles around the beam center. This module flags the spots sitting
//! on those circles:
//!
//! 1. **Circle sampling**: discretize the ring circumference for a given
//!    radius into an ordered point sequence ([`circle`]).
//! 2. **Proximity matching**: for each spot, scan the sequence for the
//!    closest sampled point within a distance threshold ([`matcher`]).
//! 3. **Aggregation**: collect the matched (spot, ring point) pairs per
//!    radius, in spot-visitation order ([`detect`]).
//!
//! Each radius is evaluated independently with fresh state; results for
//! different radii are never merged.

pub mod circle;
pub mod detect;
pub mod matcher;

pub use circle::{sample_circle, CircleSampling};
pub use detect::{detect_all, find_ice_rings, find_ice_rings_with};
pub use matcher::{BruteForceMatcher, PrefilterMatcher, RingMatch, SpotMatcher};

use crate::Spot;

// ── Detection configuration ─────────────────────────────────────────────────

/// Parameters controlling ice-ring detection.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectConfig {
    /// Beam center on the detector, in pixels.
    /// Default (1600, 1600), the center of a 3200x3200 sensor.
    pub center: Spot,
    /// Maximum distance (pixels) between a spot and a sampled ring point
    /// for the spot to count as on the ring. A spot at exactly this
    /// distance does not match. Default 100.
    pub threshold: f64,
    /// Ring radii to test, in pixels. Default [1200, 1400, 1600, 1800],
    /// the shells where ice rings show up on this detector geometry.
    pub radii: Vec<f64>,
    /// Circumference sampling density. Default [`CircleSampling::fine`].
    pub sampling: CircleSampling,
}

impl Default for DetectConfig {
    fn default() -> Self {
        Self {
            center: Spot::new(1600.0, 1600.0),
            threshold: 100.0,
            radii: vec![1200.0, 1400.0, 1600.0, 1800.0],
            sampling: CircleSampling::fine(),
        }
    }
}

// ── Detection result ────────────────────────────────────────────────────────

/// All matches found for one ring radius across a spot field.
///
/// `segments` and `ring_points` are parallel sequences in spot-visitation
/// order (ascending x); `ring_points` repeats the circle-point half of each
/// match for plotting and export convenience.
#[derive(Debug, Clone, PartialEq)]
pub struct RingDetection {
    /// The ring radius this result was computed for, in pixels.
    pub radius: f64,
    /// One entry per matched spot: the spot and its nearest ring point.
    pub segments: Vec<RingMatch>,
    /// The matched ring points alone, parallel to `segments`.
    pub ring_points: Vec<Spot>,
}

impl RingDetection {
    /// Number of spots matched to this ring.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
