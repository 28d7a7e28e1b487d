//! # icering
//!
//! Flag **ice-ring artifacts** in X-ray diffraction spot data.
//!
//! Crystallized ice in a sample diffracts into fixed resolution shells,
//! which land on the detector as circles of spots around the beam center.
//! Given the spot coordinates produced by XDS or DIALS spot finding, this
//! crate identifies the spots sitting near any of a set of concentric ring
//! radii, and hands the matched pairs to export and plotting.
//!
//! ## Features
//!
//! - **SPOT.XDS reading** — whitespace-column parsing with stable
//!   ascending-x spot ordering ([`SpotField`])
//! - **Ring matching** — nearest-sampled-point search under a distance
//!   threshold, deterministic tie-breaking ([`ring`])
//! - **Pluggable strategy** — swap the linear scan for a pre-filtered one
//!   without touching callers ([`SpotMatcher`])
//! - **Export** — one `x1 y1 x2 y2` table per ring radius ([`export`])
//! - **Rendering** — raster overview of spots, matches, and ring outlines
//!   ([`render`], behind the `image` feature)
//!
//! ## Example
//!
//! ```no_run
//! use icering::{detect_all, DetectConfig, SpotField};
//!
//! let field = SpotField::load("data/SPOT.XDS").unwrap();
//!
//! // Beam center (1600, 1600), threshold 100 px, radii 1200/1400/1600/1800
//! let config = DetectConfig::default();
//! let detections = detect_all(&field, &config).unwrap();
//!
//! for d in &detections {
//!     println!("r={}: {} spots on the ring", d.radius, d.len());
//! }
//!
//! icering::export::write_ring_files(&detections, "ICE_SPOTS", "LYSOZYME").unwrap();
//! ```
//!
//! ## Algorithm overview
//!
//! 1. **Circle sampling** — discretize each ring radius into an ordered
//!    point sequence around the beam center
//! 2. **Proximity matching** — for every spot, a running-minimum scan over
//!    the sequence; the closest sample wins if strictly within the
//!    threshold, earliest sample on ties
//! 3. **Aggregation** — collect matches per radius in spot-visitation
//!    order, keeping segments and ring points as parallel sequences

pub mod export;
#[cfg(feature = "image")]
pub mod render;
pub mod ring;
mod spot;
pub mod spotfile;

#[cfg(feature = "image")]
pub use render::RenderConfig;
pub use ring::{
    detect_all, find_ice_rings, find_ice_rings_with, sample_circle, BruteForceMatcher,
    CircleSampling, DetectConfig, PrefilterMatcher, RingDetection, RingMatch, SpotMatcher,
};
pub use spot::Spot;
pub use spotfile::SpotField;

// Commonly used types
// Note: 64-bit floats throughout; distances near the threshold decide
// matches, and 32-bit precision shows visible drift at detector scale.
pub type Vector2 = nalgebra::Vector2<f64>;
