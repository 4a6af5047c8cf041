use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Coordinate, Crop, SoilField, SoilReading};
use crate::error::CropwiseError;

/// Which engine path answers a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationMode {
    /// Coordinate lookup against zone rectangles
    #[serde(alias = "general")]
    Zone,
    /// Nutrient/pH tolerance matching over the whole catalog
    #[serde(alias = "specialized")]
    Soil,
}

impl RecommendationMode {
    pub const ALL: [RecommendationMode; 2] = [RecommendationMode::Zone, RecommendationMode::Soil];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecommendationMode::Zone => "zone",
            RecommendationMode::Soil => "soil",
        }
    }
}

impl fmt::Display for RecommendationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecommendationMode {
    type Err = CropwiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zone" | "general" => Ok(RecommendationMode::Zone),
            "soil" | "specialized" => Ok(RecommendationMode::Soil),
            _ => Err(CropwiseError::ConfigInvalid {
                key: "mode".to_string(),
                reason: format!("Invalid mode: {}. Use zone or soil", s),
            }),
        }
    }
}

/// What the soil filter returns when no crop matches a reading.
///
/// Serialized as `first-two` or `none`. Config files, environment variables
/// and CLI flags all accept the same spellings through [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FallbackPolicy {
    /// Return the first two catalog crops and flag `used_fallback`
    #[default]
    FirstTwo,
    /// Return an empty list; the presentation layer decides what to show
    Disabled,
}

impl FallbackPolicy {
    /// Number of leading catalog crops returned on a miss
    pub fn fallback_count(&self) -> usize {
        match self {
            FallbackPolicy::FirstTwo => 2,
            FallbackPolicy::Disabled => 0,
        }
    }
}

impl fmt::Display for FallbackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackPolicy::FirstTwo => write!(f, "first-two"),
            FallbackPolicy::Disabled => write!(f, "none"),
        }
    }
}

impl FromStr for FallbackPolicy {
    type Err = CropwiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first-two" | "first_two" | "firsttwo" => Ok(FallbackPolicy::FirstTwo),
            "none" | "disabled" | "off" => Ok(FallbackPolicy::Disabled),
            _ => Err(CropwiseError::ConfigInvalid {
                key: "fallback".to_string(),
                reason: format!("Invalid fallback policy: {}. Use first-two or none", s),
            }),
        }
    }
}

impl TryFrom<String> for FallbackPolicy {
    type Error = CropwiseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FallbackPolicy> for String {
    fn from(policy: FallbackPolicy) -> Self {
        policy.to_string()
    }
}

/// How a recommendation was reached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum RecommendationExplanation {
    Zone {
        coordinate: Coordinate,
        zones_evaluated: usize,
        /// Dataset indices of every zone containing the coordinate
        matched_zones: Vec<usize>,
    },
    Soil {
        /// Reading after default substitution
        reading: SoilReading,
        /// Fields that were absent or unparseable
        defaulted: Vec<SoilField>,
        crops_evaluated: usize,
        fallback: FallbackPolicy,
    },
}

/// Engine output, in dataset order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub mode: RecommendationMode,

    pub crops: Vec<Crop>,

    /// True only when the soil-mode no-match fallback fired
    pub used_fallback: bool,

    /// Number of genuine matches; zero means no crop satisfied the query
    pub matched: usize,

    pub explanation: RecommendationExplanation,
}

impl Recommendation {
    pub fn is_no_match(&self) -> bool {
        self.matched == 0
    }

    pub fn crop_names(&self) -> Vec<&str> {
        self.crops.iter().map(|crop| crop.name.as_str()).collect()
    }
}
