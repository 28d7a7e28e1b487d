//! Rasterize a detection overview image.
//!
//! Draws the same overview an interactive plot would show: the full spot
//! field in blue, matched ring points in red, spot-to-ring segments in
//! green, and the configured ring outlines in black, all on white.
//! Detector space is scaled into a square raster with +y up, so images
//! read like a beamline display.
//!
//! Requires the `image` feature to be enabled.

use std::path::Path;

use anyhow::{Context, Result};
use image::{Rgb, RgbImage};

use crate::ring::{DetectConfig, RingDetection};
use crate::{Spot, SpotField};

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLUE: Rgb<u8> = Rgb([40, 70, 220]);
const RED: Rgb<u8> = Rgb([220, 40, 40]);
const GREEN: Rgb<u8> = Rgb([0, 180, 60]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Parameters controlling the rendered overview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Output image edge length in pixels. Default 800.
    pub size_px: u32,
    /// Detector-space extent mapped onto the image, in detector pixels.
    /// Default 3200, covering a (1600, 1600)-centered sensor.
    pub detector_extent: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            size_px: 800,
            detector_extent: 3200.0,
        }
    }
}

impl RenderConfig {
    /// Map detector coordinates into image coordinates (f32, +y flipped).
    fn to_image(&self, spot: Spot) -> (f32, f32) {
        let scale = self.size_px as f64 / self.detector_extent;
        let x = spot.x * scale;
        let y = self.size_px as f64 - spot.y * scale;
        (x as f32, y as f32)
    }
}

/// Render a spot field and its per-radius detections.
pub fn render_detections(
    field: &SpotField,
    detections: &[RingDetection],
    detect_config: &DetectConfig,
    config: &RenderConfig,
) -> RgbImage {
    let mut img = RgbImage::from_pixel(config.size_px, config.size_px, WHITE);

    // Ring outlines first so everything else draws over them.
    for &radius in &detect_config.radii {
        draw_ring_outline(&mut img, config, detect_config.center, radius);
    }

    for &spot in field.spots() {
        let (x, y) = config.to_image(spot);
        put_dot(&mut img, x, y, BLUE);
    }

    for detection in detections {
        for m in &detection.segments {
            draw_line(
                &mut img,
                config.to_image(m.spot),
                config.to_image(m.ring_point),
                GREEN,
            );
        }
        for &point in &detection.ring_points {
            let (x, y) = config.to_image(point);
            put_dot(&mut img, x, y, RED);
        }
    }

    img
}

/// Render and save in one step; the format follows the file extension.
pub fn save_plot<P: AsRef<Path>>(
    field: &SpotField,
    detections: &[RingDetection],
    detect_config: &DetectConfig,
    config: &RenderConfig,
    path: P,
) -> Result<()> {
    let path = path.as_ref();
    render_detections(field, detections, detect_config, config)
        .save(path)
        .with_context(|| format!("failed to write plot image {}", path.display()))
}

fn put_pixel_checked(img: &mut RgbImage, x: f32, y: f32, color: Rgb<u8>) {
    if x >= 0.0 && y >= 0.0 {
        let (xi, yi) = (x as u32, y as u32);
        if xi < img.width() && yi < img.height() {
            img.put_pixel(xi, yi, color);
        }
    }
}

/// A 2x2 dot so individual spots stay visible at typical scales.
fn put_dot(img: &mut RgbImage, x: f32, y: f32, color: Rgb<u8>) {
    for dx in 0..2 {
        for dy in 0..2 {
            put_pixel_checked(img, x + dx as f32, y + dy as f32, color);
        }
    }
}

fn draw_line(img: &mut RgbImage, a: (f32, f32), b: (f32, f32), color: Rgb<u8>) {
    let steps = (b.0 - a.0).abs().max((b.1 - a.1).abs()).ceil().max(1.0) as usize;
    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let x = a.0 + (b.0 - a.0) * t;
        let y = a.1 + (b.1 - a.1) * t;
        put_pixel_checked(img, x, y, color);
    }
}

fn draw_ring_outline(img: &mut RgbImage, config: &RenderConfig, center: Spot, radius: f64) {
    let scale = config.size_px as f64 / config.detector_extent;
    // Enough steps that consecutive outline pixels touch.
    let steps = ((std::f64::consts::TAU * radius * scale).ceil() as usize).max(16);
    for k in 0..steps {
        let angle = k as f64 / steps as f64 * std::f64::consts::TAU;
        let p = Spot::new(
            radius * angle.sin() + center.x,
            radius * angle.cos() + center.y,
        );
        let (x, y) = config.to_image(p);
        put_pixel_checked(img, x, y, BLACK);
    }
}
