use cropwise_core::models::{Coordinate, Crop, NumericInput};
use cropwise_core::{CropDataset, InvalidQueryError};
use geo::Rect;
use std::sync::Arc;

use crate::spatial::{rect_contains, zone_rect};

/// Zones containing a coordinate and the crops they recommend
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneMatch {
    /// Dataset indices of matching zones, ascending
    pub zone_indices: Vec<usize>,
    /// Concatenated crops of the matching zones, duplicates preserved
    pub crops: Vec<Crop>,
}

/// Coordinate-to-zone lookup over a shared dataset
#[derive(Debug, Clone)]
pub struct ZoneLocator {
    dataset: Arc<CropDataset>,
    rects: Vec<Rect<f64>>,
}

impl ZoneLocator {
    /// Create a locator, precomputing every zone rectangle
    pub fn new(dataset: Arc<CropDataset>) -> Self {
        let rects = dataset.zones().iter().map(zone_rect).collect();
        Self { dataset, rects }
    }

    pub fn dataset(&self) -> &CropDataset {
        &self.dataset
    }

    /// Indices of every zone whose rectangle contains the coordinate
    pub fn matching_zones(&self, coordinate: &Coordinate) -> Vec<usize> {
        self.rects
            .iter()
            .enumerate()
            .filter_map(|(idx, rect)| rect_contains(rect, coordinate).then_some(idx))
            .collect()
    }

    /// Match zones and gather their crops in dataset order.
    ///
    /// Overlapping zones each contribute their full list, so a crop that
    /// both recommend appears twice. No match yields an empty result.
    pub fn locate(&self, coordinate: &Coordinate) -> ZoneMatch {
        let zone_indices = self.matching_zones(coordinate);
        let zones = self.dataset.zones();

        let crops = zone_indices
            .iter()
            .flat_map(|&idx| zones[idx].recommended_crops.iter().cloned())
            .collect();

        ZoneMatch { zone_indices, crops }
    }

    /// Crops recommended at a validated coordinate
    pub fn lookup(&self, coordinate: &Coordinate) -> Vec<Crop> {
        self.locate(coordinate).crops
    }

    /// Validate raw inputs, then look up.
    ///
    /// Missing or non-numeric input fails before any zone is examined.
    pub fn lookup_input(
        &self,
        lat: Option<&NumericInput>,
        lon: Option<&NumericInput>,
    ) -> Result<Vec<Crop>, InvalidQueryError> {
        let coordinate = Coordinate::parse(lat, lon)?;
        Ok(self.lookup(&coordinate))
    }
}
