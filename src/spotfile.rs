//! Read spot coordinates from SPOT.XDS-style text output.
//!
//! Both XDS and DIALS spot-finding emit whitespace-separated numeric
//! columns where the first two columns are the x and y pixel coordinates
//! of a detected spot. Everything past the second column (intensity,
//! frame number, ...) is ignored here.
//!
//! The parsed collection has a stable iteration order: ascending x, then
//! insertion order of y for spots sharing an x. For grouping, x values are
//! rounded to 4 decimal places so that multiple detections in the same
//! detector column collapse onto one x key. Exported result files are
//! index-correlated across ring radii, so this ordering must not change
//! between runs.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::Spot;

/// Scale used to turn a 4-decimal-rounded x value into an orderable
/// integer grouping key.
const X_KEY_SCALE: f64 = 1e4;

/// The full set of spots read from one spot-finding output file.
///
/// Immutable after construction; iteration order is ascending x, then
/// insertion order of y within an x group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpotField {
    spots: Vec<Spot>,
}

impl SpotField {
    /// Build a field from raw (x, y) pairs, applying the same grouping and
    /// ordering as file parsing: x rounded to 4 decimals, ascending x,
    /// stable y order within each x group.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut groups: BTreeMap<i64, Vec<f64>> = BTreeMap::new();
        for (x, y) in pairs {
            groups.entry(x_key(x)).or_default().push(y);
        }
        let spots = groups
            .into_iter()
            .flat_map(|(key, ys)| {
                let x = key as f64 / X_KEY_SCALE;
                ys.into_iter().map(move |y| Spot::new(x, y))
            })
            .collect();
        Self { spots }
    }

    /// Parse spot coordinates from in-memory file contents.
    ///
    /// Any line that does not start with two parseable floats aborts the
    /// whole source: a malformed row means the file is not spot-finding
    /// output, and silently skipping it would desynchronize the
    /// index-correlated exports.
    pub fn parse(data: &str) -> Result<SpotField> {
        let mut pairs = Vec::new();
        for (idx, line) in data.lines().enumerate() {
            let mut cols = line.split_whitespace();
            let (Some(xs), Some(ys)) = (cols.next(), cols.next()) else {
                bail!("line {}: expected at least two numeric columns", idx + 1);
            };
            let x: f64 = xs
                .parse()
                .with_context(|| format!("line {}: bad x coordinate {:?}", idx + 1, xs))?;
            let y: f64 = ys
                .parse()
                .with_context(|| format!("line {}: bad y coordinate {:?}", idx + 1, ys))?;
            pairs.push((x, y));
        }
        Ok(Self::from_pairs(pairs))
    }

    /// Load and parse a spot-finding output file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<SpotField> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read spot file {}", path.display()))?;
        Self::parse(&data).with_context(|| format!("malformed spot file {}", path.display()))
    }

    /// All spots in stable iteration order.
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }
}

fn x_key(x: f64) -> i64 {
    (x * X_KEY_SCALE).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_first_two_columns() {
        let field = SpotField::parse("10.5 20.25 993.1 4\n30.0 40.0 12.0 7\n").unwrap();
        assert_eq!(
            field.spots(),
            &[Spot::new(10.5, 20.25), Spot::new(30.0, 40.0)]
        );
    }

    #[test]
    fn orders_by_ascending_x() {
        let field = SpotField::parse("300.0 1.0\n100.0 2.0\n200.0 3.0\n").unwrap();
        let xs: Vec<f64> = field.spots().iter().map(|s| s.x).collect();
        assert_eq!(xs, vec![100.0, 200.0, 300.0]);
    }

    #[test]
    fn groups_duplicate_x_preserving_y_order() {
        // The two 1600.00004 entries round to the same 4-decimal x key as
        // 1600.0 and must stay in insertion order behind it.
        let field = SpotField::parse("1600.0 5.0\n17.0 9.0\n1600.00004 7.0\n1600.0 6.0\n").unwrap();
        assert_eq!(
            field.spots(),
            &[
                Spot::new(17.0, 9.0),
                Spot::new(1600.0, 5.0),
                Spot::new(1600.0, 7.0),
                Spot::new(1600.0, 6.0),
            ]
        );
    }

    #[test]
    fn x_rounded_to_four_decimals() {
        let field = SpotField::parse("2.71828182 1.0\n").unwrap();
        assert_eq!(field.spots()[0].x, 2.7183);
    }

    #[test]
    fn empty_input_is_empty_field() {
        let field = SpotField::parse("").unwrap();
        assert!(field.is_empty());
        assert_eq!(field.len(), 0);
    }

    #[test]
    fn malformed_row_aborts_with_line_number() {
        let err = SpotField::parse("1.0 2.0\n3.0\n5.0 6.0\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "got: {err:#}");

        let err = SpotField::parse("1.0 2.0\nfoo bar\n").unwrap_err();
        assert!(format!("{err:#}").contains("line 2"), "got: {err:#}");
    }

    #[test]
    fn from_pairs_matches_parse_ordering() {
        let pairs = vec![(300.0, 1.0), (100.0, 2.0), (100.0, 3.0)];
        let field = SpotField::from_pairs(pairs);
        assert_eq!(
            field.spots(),
            &[
                Spot::new(100.0, 2.0),
                Spot::new(100.0, 3.0),
                Spot::new(300.0, 1.0),
            ]
        );
    }
}
