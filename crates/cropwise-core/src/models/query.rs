//! Query inputs and the explicit parse/default-substitution steps.
//!
//! Callers (form fields, CLI flags, JSON bodies) hand over raw values as
//! [`NumericInput`]. Zone queries turn them into a validated [`Coordinate`]
//! or fail with [`InvalidQueryError`]; soil queries never fail and instead
//! substitute the documented defaults for anything absent or unparseable.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::InvalidQueryError;

pub const DEFAULT_NITROGEN: f64 = 50.0;
pub const DEFAULT_PHOSPHORUS: f64 = 30.0;
pub const DEFAULT_POTASSIUM: f64 = 40.0;
pub const DEFAULT_PH: f64 = 6.5;

/// A raw numeric value as supplied by a caller: a JSON number or free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
    /// Any other JSON value (boolean, array, object); never a number
    Other(serde_json::Value),
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Number(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(value: String) -> Self {
        NumericInput::Text(value)
    }
}

/// Parse an optional raw input into a finite number.
///
/// Absent, blank, unparseable and non-finite inputs all yield `None`.
pub fn parse_optional_number(input: Option<&NumericInput>) -> Option<f64> {
    let value = match input? {
        NumericInput::Number(value) => *value,
        NumericInput::Text(text) => text.trim().parse::<f64>().ok()?,
        NumericInput::Other(_) => return None,
    };
    value.is_finite().then_some(value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateAxis {
    Latitude,
    Longitude,
}

impl fmt::Display for CoordinateAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateAxis::Latitude => write!(f, "latitude"),
            CoordinateAxis::Longitude => write!(f, "longitude"),
        }
    }
}

/// A validated geographic coordinate; both components are finite
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Result<Self, InvalidQueryError> {
        if !lat.is_finite() {
            return Err(InvalidQueryError::NonFiniteCoordinate { axis: CoordinateAxis::Latitude });
        }
        if !lon.is_finite() {
            return Err(InvalidQueryError::NonFiniteCoordinate { axis: CoordinateAxis::Longitude });
        }
        Ok(Self { lat, lon })
    }

    /// Validate raw latitude/longitude inputs. Latitude is checked first.
    pub fn parse(
        lat: Option<&NumericInput>,
        lon: Option<&NumericInput>,
    ) -> Result<Self, InvalidQueryError> {
        let lat = parse_coordinate(CoordinateAxis::Latitude, lat)?;
        let lon = parse_coordinate(CoordinateAxis::Longitude, lon)?;
        Self::new(lat, lon)
    }
}

fn parse_coordinate(
    axis: CoordinateAxis,
    input: Option<&NumericInput>,
) -> Result<f64, InvalidQueryError> {
    let value = match input {
        None => return Err(InvalidQueryError::MissingCoordinate { axis }),
        Some(NumericInput::Number(value)) => *value,
        Some(NumericInput::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Err(InvalidQueryError::MissingCoordinate { axis });
            }
            text.parse::<f64>().map_err(|_| InvalidQueryError::NonNumericCoordinate {
                axis,
                input: text.to_string(),
            })?
        }
        Some(NumericInput::Other(value)) => {
            return Err(InvalidQueryError::NonNumericCoordinate { axis, input: value.to_string() })
        }
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(InvalidQueryError::NonFiniteCoordinate { axis })
    }
}

/// Raw zone-mode query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneInput {
    #[serde(default)]
    pub lat: Option<NumericInput>,
    #[serde(default)]
    pub lon: Option<NumericInput>,
}

impl ZoneInput {
    pub fn new(lat: impl Into<NumericInput>, lon: impl Into<NumericInput>) -> Self {
        Self { lat: Some(lat.into()), lon: Some(lon.into()) }
    }

    pub fn to_coordinate(&self) -> Result<Coordinate, InvalidQueryError> {
        Coordinate::parse(self.lat.as_ref(), self.lon.as_ref())
    }
}

/// Soil measurement kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilField {
    #[serde(rename = "N")]
    Nitrogen,
    #[serde(rename = "P")]
    Phosphorus,
    #[serde(rename = "K")]
    Potassium,
    #[serde(rename = "pH")]
    Ph,
}

impl SoilField {
    pub const ALL: [SoilField; 4] =
        [SoilField::Nitrogen, SoilField::Phosphorus, SoilField::Potassium, SoilField::Ph];

    /// Short label used in the dataset and on forms
    pub fn label(&self) -> &'static str {
        match self {
            SoilField::Nitrogen => "N",
            SoilField::Phosphorus => "P",
            SoilField::Potassium => "K",
            SoilField::Ph => "pH",
        }
    }

    pub fn default_value(&self) -> f64 {
        match self {
            SoilField::Nitrogen => DEFAULT_NITROGEN,
            SoilField::Phosphorus => DEFAULT_PHOSPHORUS,
            SoilField::Potassium => DEFAULT_POTASSIUM,
            SoilField::Ph => DEFAULT_PH,
        }
    }
}

impl fmt::Display for SoilField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw soil-mode query; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SoilInput {
    #[serde(rename = "N", default, alias = "n")]
    pub n: Option<NumericInput>,
    #[serde(rename = "P", default, alias = "p")]
    pub p: Option<NumericInput>,
    #[serde(rename = "K", default, alias = "k")]
    pub k: Option<NumericInput>,
    #[serde(rename = "pH", default, alias = "ph")]
    pub ph: Option<NumericInput>,
}

impl SoilInput {
    /// Run every field through [`parse_optional_number`]
    pub fn parse(&self) -> PartialSoilReading {
        PartialSoilReading {
            n: parse_optional_number(self.n.as_ref()),
            p: parse_optional_number(self.p.as_ref()),
            k: parse_optional_number(self.k.as_ref()),
            ph: parse_optional_number(self.ph.as_ref()),
        }
    }
}

/// Parsed soil values, still possibly incomplete
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialSoilReading {
    #[serde(rename = "N", default, skip_serializing_if = "Option::is_none")]
    pub n: Option<f64>,
    #[serde(rename = "P", default, skip_serializing_if = "Option::is_none")]
    pub p: Option<f64>,
    #[serde(rename = "K", default, skip_serializing_if = "Option::is_none")]
    pub k: Option<f64>,
    #[serde(rename = "pH", default, skip_serializing_if = "Option::is_none")]
    pub ph: Option<f64>,
}

impl PartialSoilReading {
    pub fn get(&self, field: SoilField) -> Option<f64> {
        match field {
            SoilField::Nitrogen => self.n,
            SoilField::Phosphorus => self.p,
            SoilField::Potassium => self.k,
            SoilField::Ph => self.ph,
        }
    }

    /// Fields that will fall back to their default, in N, P, K, pH order
    pub fn missing_fields(&self) -> Vec<SoilField> {
        SoilField::ALL.into_iter().filter(|field| self.get(*field).is_none()).collect()
    }
}

/// A complete soil reading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilReading {
    #[serde(rename = "N")]
    pub n: f64,
    #[serde(rename = "P")]
    pub p: f64,
    #[serde(rename = "K")]
    pub k: f64,
    #[serde(rename = "pH")]
    pub ph: f64,
}

impl Default for SoilReading {
    fn default() -> Self {
        Self {
            n: DEFAULT_NITROGEN,
            p: DEFAULT_PHOSPHORUS,
            k: DEFAULT_POTASSIUM,
            ph: DEFAULT_PH,
        }
    }
}

impl SoilReading {
    pub fn new(n: f64, p: f64, k: f64, ph: f64) -> Self {
        Self { n, p, k, ph }
    }

    /// Fill every absent field with its default
    pub fn with_defaults(partial: &PartialSoilReading) -> Self {
        let defaults = Self::default();
        Self {
            n: partial.n.unwrap_or(defaults.n),
            p: partial.p.unwrap_or(defaults.p),
            k: partial.k.unwrap_or(defaults.k),
            ph: partial.ph.unwrap_or(defaults.ph),
        }
    }
}

/// A query for the recommendation engine, tagged by mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum RecommendationQuery {
    #[serde(alias = "general")]
    Zone(ZoneInput),
    #[serde(alias = "specialized")]
    Soil(SoilInput),
}

impl RecommendationQuery {
    pub fn zone(lat: impl Into<NumericInput>, lon: impl Into<NumericInput>) -> Self {
        RecommendationQuery::Zone(ZoneInput::new(lat, lon))
    }

    pub fn soil(input: SoilInput) -> Self {
        RecommendationQuery::Soil(input)
    }
}
