//! Gridded model output fields and masking helpers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::MapExtent;

/// One 2-D field as returned by a grid source.
///
/// Coordinates are 1-D lon/lat vectors; `values` is row-major with latitude
/// as the slow axis (`values[j * lon.len() + i]`). Missing data is NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridField {
    pub lon: Vec<f64>,
    pub lat: Vec<f64>,
    pub values: Vec<f64>,
    /// Run time stamped on the file by the data server, when present.
    pub init_time: Option<DateTime<Utc>>,
}

impl GridField {
    pub fn new(
        lon: Vec<f64>,
        lat: Vec<f64>,
        values: Vec<f64>,
        init_time: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            lon,
            lat,
            values,
            init_time,
        }
    }

    /// Number of points in the longitude direction.
    pub fn nx(&self) -> usize {
        self.lon.len()
    }

    /// Number of points in the latitude direction.
    pub fn ny(&self) -> usize {
        self.lat.len()
    }

    /// Bounds-checked point access.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.nx() || j >= self.ny() {
            return None;
        }
        self.values.get(j * self.nx() + i).copied()
    }

    /// Mask values equal to a sentinel, e.g. the server's 9999 missing marker.
    pub fn mask_equal(&mut self, sentinel: f64) {
        for v in &mut self.values {
            if *v == sentinel {
                *v = f64::NAN;
            }
        }
    }

    /// Mask values below a threshold, e.g. sub-10 dBZ reflectivity noise.
    pub fn mask_below(&mut self, threshold: f64) {
        for v in &mut self.values {
            if *v < threshold {
                *v = f64::NAN;
            }
        }
    }

    /// Number of masked points.
    pub fn masked_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_nan()).count()
    }

    /// Bounding window of the coordinate vectors, if both are non-empty.
    pub fn extent(&self) -> Option<MapExtent> {
        let (west, east) = min_max(&self.lon)?;
        let (south, north) = min_max(&self.lat)?;
        Some(MapExtent::new(west, south, east, north))
    }
}

fn min_max(coords: &[f64]) -> Option<(f64, f64)> {
    let first = *coords.first()?;
    Some(
        coords
            .iter()
            .fold((first, first), |(lo, hi), &x| (lo.min(x), hi.max(x))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GridField {
        // 3x2 grid, lat-major rows
        GridField::new(
            vec![116.0, 117.0, 118.0],
            vec![38.0, 39.0],
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            None,
        )
    }

    #[test]
    fn test_get_row_major() {
        let field = sample();
        assert_eq!(field.get(0, 0), Some(1.0));
        assert_eq!(field.get(2, 0), Some(3.0));
        assert_eq!(field.get(0, 1), Some(4.0));
        assert_eq!(field.get(2, 1), Some(6.0));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let field = sample();
        assert_eq!(field.get(3, 0), None);
        assert_eq!(field.get(0, 2), None);
    }

    #[test]
    fn test_mask_equal() {
        let mut field = sample();
        field.values[1] = 9999.0;
        field.values[4] = 9999.0;
        field.mask_equal(9999.0);
        assert_eq!(field.masked_count(), 2);
        assert_eq!(field.get(0, 0), Some(1.0));
    }

    #[test]
    fn test_mask_below() {
        let mut field = sample();
        field.mask_below(4.0);
        assert_eq!(field.masked_count(), 3);
        assert_eq!(field.get(0, 1), Some(4.0));
    }

    #[test]
    fn test_extent() {
        let extent = sample().extent().unwrap();
        assert_eq!(extent.west, 116.0);
        assert_eq!(extent.east, 118.0);
        assert_eq!(extent.south, 38.0);
        assert_eq!(extent.north, 39.0);
    }

    #[test]
    fn test_extent_empty_coords() {
        let field = GridField::new(vec![], vec![], vec![], None);
        assert!(field.extent().is_none());
    }
}
