//! Soil compatibility filtering over the flattened crop catalog.
//!
//! A crop matches a reading when the pH falls inside its ideal interval and
//! each of N, P and K lies within a fixed relative band around the crop's
//! ideal value. Bounds are inclusive everywhere.

use cropwise_core::models::{Crop, FallbackPolicy, Interval, SoilReading};
use cropwise_core::CropDataset;
use std::sync::Arc;

/// Relative half-width of the nutrient band (±20%)
pub const NUTRIENT_TOLERANCE: f64 = 0.2;

/// Acceptance interval `[ideal·(1−t), ideal·(1+t)]` for a nutrient
pub fn nutrient_band(ideal: f64, tolerance: f64) -> Interval {
    Interval::new(ideal * (1.0 - tolerance), ideal * (1.0 + tolerance))
}

/// Check a crop against a reading with the standard tolerance
pub fn is_compatible(crop: &Crop, reading: &SoilReading) -> bool {
    is_compatible_within(crop, reading, NUTRIENT_TOLERANCE)
}

/// Check a crop against a reading with an explicit nutrient tolerance
pub fn is_compatible_within(crop: &Crop, reading: &SoilReading, tolerance: f64) -> bool {
    crop.ideal_ph.contains(reading.ph)
        && nutrient_band(crop.ideal_n, tolerance).contains(reading.n)
        && nutrient_band(crop.ideal_p, tolerance).contains(reading.p)
        && nutrient_band(crop.ideal_k, tolerance).contains(reading.k)
}

/// Outcome of a soil filter pass
#[derive(Debug, Clone, PartialEq)]
pub struct SoilMatch {
    pub crops: Vec<Crop>,
    pub used_fallback: bool,
    /// Genuine matches before any fallback was applied
    pub matched: usize,
    pub crops_evaluated: usize,
}

/// Filters the catalog of a shared dataset
#[derive(Debug, Clone)]
pub struct SoilFilter {
    dataset: Arc<CropDataset>,
    policy: FallbackPolicy,
}

impl SoilFilter {
    pub fn new(dataset: Arc<CropDataset>) -> Self {
        Self { dataset, policy: FallbackPolicy::default() }
    }

    pub fn with_fallback_policy(mut self, policy: FallbackPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> FallbackPolicy {
        self.policy
    }

    /// Every compatible crop in catalog order.
    ///
    /// With no match, [`FallbackPolicy::FirstTwo`] returns the first two
    /// catalog crops and sets `used_fallback`; [`FallbackPolicy::Disabled`]
    /// returns nothing.
    pub fn filter(&self, reading: &SoilReading) -> SoilMatch {
        let crops: Vec<Crop> =
            self.dataset.catalog().filter(|crop| is_compatible(crop, reading)).cloned().collect();
        let crops_evaluated = self.dataset.catalog_len();

        if !crops.is_empty() {
            return SoilMatch { matched: crops.len(), crops, used_fallback: false, crops_evaluated };
        }

        match self.policy {
            FallbackPolicy::FirstTwo => SoilMatch {
                crops: self.dataset.catalog().take(self.policy.fallback_count()).cloned().collect(),
                used_fallback: true,
                matched: 0,
                crops_evaluated,
            },
            FallbackPolicy::Disabled => {
                SoilMatch { crops: Vec::new(), used_fallback: false, matched: 0, crops_evaluated }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cropwise_core::models::Zone;

    fn crop(name: &str, ph: [f64; 2], n: f64, p: f64, k: f64) -> Crop {
        Crop {
            name: name.to_string(),
            soil_type: "Loamy".to_string(),
            climate: "Temperate".to_string(),
            water_requirement: "Moderate".to_string(),
            ideal_ph: ph.into(),
            ideal_n: n,
            ideal_p: p,
            ideal_k: k,
            season: None,
            other_info: None,
        }
    }

    fn wheat() -> Crop {
        crop("Wheat", [6.0, 7.5], 40.0, 20.0, 30.0)
    }

    fn filter_over(crops: Vec<Crop>) -> SoilFilter {
        let zone = Zone::new(Interval::new(0.0, 1.0), Interval::new(0.0, 1.0), crops);
        SoilFilter::new(Arc::new(CropDataset::new(vec![zone]).unwrap()))
    }

    #[test]
    fn test_wheat_band() {
        assert!(is_compatible(&wheat(), &SoilReading::new(40.0, 20.0, 30.0, 7.0)));
        assert!(!is_compatible(&wheat(), &SoilReading::new(100.0, 20.0, 30.0, 7.0)));
    }

    #[test]
    fn test_band_edges_are_inclusive() {
        // [32, 48] for N, [16, 24] for P, [24, 36] for K
        assert!(is_compatible(&wheat(), &SoilReading::new(32.0, 16.0, 24.0, 6.0)));
        assert!(is_compatible(&wheat(), &SoilReading::new(48.0, 24.0, 36.0, 7.5)));
        assert!(!is_compatible(&wheat(), &SoilReading::new(31.9, 20.0, 30.0, 7.0)));
        assert!(!is_compatible(&wheat(), &SoilReading::new(40.0, 20.0, 30.0, 7.6)));
    }

    #[test]
    fn test_every_nutrient_is_checked() {
        assert!(!is_compatible(&wheat(), &SoilReading::new(40.0, 10.0, 30.0, 7.0)));
        assert!(!is_compatible(&wheat(), &SoilReading::new(40.0, 20.0, 50.0, 7.0)));
    }

    #[test]
    fn test_matches_keep_catalog_order() {
        let filter = filter_over(vec![
            crop("Maize", [5.5, 7.5], 50.0, 30.0, 40.0),
            wheat(),
            crop("Sorghum", [5.5, 7.5], 45.0, 28.0, 38.0),
        ]);

        let result = filter.filter(&SoilReading::default());
        let names: Vec<&str> = result.crops.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Maize", "Sorghum"]);
        assert_eq!(result.matched, 2);
        assert_eq!(result.crops_evaluated, 3);
        assert!(!result.used_fallback);
    }

    #[test]
    fn test_fallback_returns_first_two() {
        let filter = filter_over(vec![
            crop("A", [4.0, 4.5], 10.0, 10.0, 10.0),
            crop("B", [4.0, 4.5], 10.0, 10.0, 10.0),
            crop("C", [4.0, 4.5], 10.0, 10.0, 10.0),
        ]);

        let result = filter.filter(&SoilReading::default());
        let names: Vec<&str> = result.crops.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert!(result.used_fallback);
        assert_eq!(result.matched, 0);
    }

    #[test]
    fn test_fallback_with_single_crop_catalog() {
        let filter = filter_over(vec![crop("A", [4.0, 4.5], 10.0, 10.0, 10.0)]);
        let result = filter.filter(&SoilReading::default());
        assert_eq!(result.crops.len(), 1);
        assert!(result.used_fallback);
    }

    #[test]
    fn test_disabled_fallback_reports_no_match() {
        let filter = filter_over(vec![crop("A", [4.0, 4.5], 10.0, 10.0, 10.0)])
            .with_fallback_policy(FallbackPolicy::Disabled);

        let result = filter.filter(&SoilReading::default());
        assert!(result.crops.is_empty());
        assert!(!result.used_fallback);
        assert_eq!(result.matched, 0);
    }

    #[test]
    fn test_empty_catalog_falls_back_to_nothing() {
        let filter = SoilFilter::new(Arc::new(CropDataset::new(Vec::new()).unwrap()));
        let result = filter.filter(&SoilReading::default());
        assert!(result.crops.is_empty());
        assert!(result.used_fallback);
    }
}
