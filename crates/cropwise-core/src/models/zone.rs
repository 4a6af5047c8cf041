use serde::{Deserialize, Serialize};

use super::{Crop, Interval};

/// Rectangular latitude/longitude region with its recommended crops
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub lat_range: Interval,

    pub lon_range: Interval,

    /// Ordered; the same crop may also appear in other zones
    pub recommended_crops: Vec<Crop>,
}

impl Zone {
    pub fn new(lat_range: Interval, lon_range: Interval, recommended_crops: Vec<Crop>) -> Self {
        Self { lat_range, lon_range, recommended_crops }
    }
}
