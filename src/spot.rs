//! A diffraction spot: one (x, y) coordinate in detector-pixel space.
//!
//! Spots are the output of upstream spot-finding (XDS `COLSPOT`, DIALS
//! `dials.find_spots`) and are the input to ring matching. A spot is
//! immutable once produced.

use crate::Vector2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spot {
    /// Position in pixels along the detector fast axis.
    pub x: f64,
    /// Position in pixels along the detector slow axis.
    pub y: f64,
}

impl Spot {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Position as a nalgebra vector for arithmetic.
    pub fn as_vector(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// Euclidean distance to another spot, in pixels.
    pub fn distance(&self, other: &Spot) -> f64 {
        (self.as_vector() - other.as_vector()).norm()
    }

    /// Copy with both coordinates rounded to `decimals` decimal places.
    pub fn rounded(&self, decimals: u32) -> Spot {
        let scale = 10f64.powi(decimals as i32);
        Spot {
            x: (self.x * scale).round() / scale,
            y: (self.y * scale).round() / scale,
        }
    }
}
