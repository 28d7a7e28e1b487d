//! Write per-radius match results as flat text tables.
//!
//! One file is written per detected ring, named `{stem}_{n}_SPOT.xds` with
//! `n` the 1-based position of the radius in the configured radius list.
//! The format is a fixed four-column table with header `x1 y1 x2 y2`: the
//! matched spot's coordinates followed by its ring point's. Rows across
//! the per-radius files of one run are index-correlated through the spot
//! field's stable iteration order.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::ring::RingDetection;

/// Write one result file per detection into `dir`, creating the directory
/// if needed. Returns the written paths in radius order.
pub fn write_ring_files<P: AsRef<Path>>(
    detections: &[RingDetection],
    dir: P,
    stem: &str,
) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;

    let mut written = Vec::with_capacity(detections.len());
    for (idx, detection) in detections.iter().enumerate() {
        let path = dir.join(format!("{}_{}_SPOT.xds", stem, idx + 1));
        let mut table = String::from("x1 y1 x2 y2\n");
        for m in &detection.segments {
            table.push_str(&format!(
                "{} {} {} {}\n",
                m.spot.x, m.spot.y, m.ring_point.x, m.ring_point.y
            ));
        }
        std::fs::write(&path, table)
            .with_context(|| format!("failed to write {}", path.display()))?;
        written.push(path);
    }
    Ok(written)
}
