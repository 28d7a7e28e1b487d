//! Per-radius detection over a full spot field.
//!
//! One circle is sampled per radius, then every spot is matched against it
//! in the field's stable order. The double loop is O(P × C) for P spots
//! and C circle samples, which is fine at typical spot counts (a few
//! thousand per file); [`find_ice_rings_with`] accepts an alternative
//! [`SpotMatcher`] for callers that need to go faster.

use std::time::Instant;

use anyhow::Result;
use tracing::{debug, info};

use crate::SpotField;

use super::circle::sample_circle;
use super::matcher::{BruteForceMatcher, SpotMatcher};
use super::{DetectConfig, RingDetection};

/// Find all spots within the configured threshold of the ring with the
/// given radius.
///
/// Matches are collected in spot-visitation order, so results are
/// index-correlated with [`find_ice_rings`] runs at other radii over the
/// same field. Running twice on the same inputs yields identical results.
///
/// An empty field yields an empty detection, not an error; only a
/// degenerate radius or sampling step fails.
pub fn find_ice_rings(
    field: &SpotField,
    radius: f64,
    config: &DetectConfig,
) -> Result<RingDetection> {
    find_ice_rings_with(field, radius, config, &BruteForceMatcher)
}

/// [`find_ice_rings`] with an explicit matching strategy.
pub fn find_ice_rings_with(
    field: &SpotField,
    radius: f64,
    config: &DetectConfig,
    matcher: &dyn SpotMatcher,
) -> Result<RingDetection> {
    let ring_samples = sample_circle(config.center, radius, config.sampling)?;

    let mut segments = Vec::new();
    let mut ring_points = Vec::new();
    for &spot in field.spots() {
        if let Some(m) = matcher.match_spot(spot, &ring_samples, config.threshold) {
            debug!(
                "spot ({:.1}, {:.1}) is {:.2} px from the r={} ring at ({:.2}, {:.2})",
                m.spot.x, m.spot.y, m.distance, radius, m.ring_point.x, m.ring_point.y
            );
            ring_points.push(m.ring_point);
            segments.push(m);
        }
    }

    Ok(RingDetection {
        radius,
        segments,
        ring_points,
    })
}

/// Run [`find_ice_rings`] for every configured radius, in order.
///
/// Each radius is evaluated independently with a freshly sampled circle;
/// the returned detections parallel `config.radii`.
pub fn detect_all(field: &SpotField, config: &DetectConfig) -> Result<Vec<RingDetection>> {
    let mut detections = Vec::with_capacity(config.radii.len());
    for &radius in &config.radii {
        let t0 = Instant::now();
        let detection = find_ice_rings(field, radius, config)?;
        info!(
            "r={}: {} of {} spots within {} px ({:.1} ms)",
            radius,
            detection.len(),
            field.len(),
            config.threshold,
            t0.elapsed().as_secs_f64() * 1000.0
        );
        detections.push(detection);
    }
    Ok(detections)
}
