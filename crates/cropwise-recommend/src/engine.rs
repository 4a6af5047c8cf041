use cropwise_core::models::{
    Coordinate, FallbackPolicy, Recommendation, RecommendationExplanation, RecommendationMode,
    RecommendationQuery, SoilField, SoilInput, SoilReading, ZoneInput,
};
use cropwise_core::{CropDataset, Result};
use cropwise_geo::ZoneLocator;
use std::sync::Arc;

use crate::soil::SoilFilter;

/// Single entry point for both recommendation modes.
///
/// The engine only reads the shared dataset, so one instance can serve
/// concurrent callers and identical queries always produce identical results.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    locator: ZoneLocator,
    soil: SoilFilter,
}

impl RecommendationEngine {
    pub fn new(dataset: Arc<CropDataset>) -> Self {
        Self { locator: ZoneLocator::new(dataset.clone()), soil: SoilFilter::new(dataset) }
    }

    pub fn with_fallback_policy(mut self, policy: FallbackPolicy) -> Self {
        self.soil = self.soil.with_fallback_policy(policy);
        self
    }

    pub fn fallback_policy(&self) -> FallbackPolicy {
        self.soil.policy()
    }

    pub fn dataset(&self) -> &CropDataset {
        self.locator.dataset()
    }

    /// Dispatch a query to the zone locator or the soil filter
    pub fn recommend(&self, query: &RecommendationQuery) -> Result<Recommendation> {
        match query {
            RecommendationQuery::Zone(input) => self.recommend_zone(input),
            RecommendationQuery::Soil(input) => Ok(self.recommend_soil(input)),
        }
    }

    /// Zone mode. Fails only when a coordinate is missing or not a number.
    pub fn recommend_zone(&self, input: &ZoneInput) -> Result<Recommendation> {
        let coordinate = input.to_coordinate()?;
        Ok(self.recommend_at(coordinate))
    }

    pub fn recommend_at(&self, coordinate: Coordinate) -> Recommendation {
        let found = self.locator.locate(&coordinate);

        Recommendation {
            mode: RecommendationMode::Zone,
            matched: found.crops.len(),
            crops: found.crops,
            used_fallback: false,
            explanation: RecommendationExplanation::Zone {
                coordinate,
                zones_evaluated: self.dataset().zones().len(),
                matched_zones: found.zone_indices,
            },
        }
    }

    /// Soil mode. Never fails: absent or unparseable fields take defaults.
    pub fn recommend_soil(&self, input: &SoilInput) -> Recommendation {
        let partial = input.parse();
        let reading = SoilReading::with_defaults(&partial);
        self.recommend_reading(reading, partial.missing_fields())
    }

    fn recommend_reading(
        &self,
        reading: SoilReading,
        defaulted: Vec<SoilField>,
    ) -> Recommendation {
        let result = self.soil.filter(&reading);

        Recommendation {
            mode: RecommendationMode::Soil,
            crops: result.crops,
            used_fallback: result.used_fallback,
            matched: result.matched,
            explanation: RecommendationExplanation::Soil {
                reading,
                defaulted,
                crops_evaluated: result.crops_evaluated,
                fallback: self.soil.policy(),
            },
        }
    }
}
