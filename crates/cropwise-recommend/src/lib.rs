//! Cropwise Recommend - soil filtering and the recommendation façade
//!
//! This crate combines the zone locator and the soil compatibility filter
//! behind one stateless engine, plus the dashboard's irrigation advice.

pub mod engine;
pub mod irrigation;
pub mod soil;

pub use engine::RecommendationEngine;
pub use irrigation::{advise, IrrigationAction, IrrigationAdvice, TemperatureBand};
pub use soil::{is_compatible, is_compatible_within, SoilFilter, SoilMatch, NUTRIENT_TOLERANCE};
