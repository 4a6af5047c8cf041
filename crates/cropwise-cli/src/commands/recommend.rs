//! `zone` and `soil` commands

use anyhow::Result;
use cropwise_core::models::{
    NumericInput, Recommendation, RecommendationExplanation, SoilInput, ZoneInput,
};
use cropwise_core::CropwiseError;
use cropwise_recommend::RecommendationEngine;
use cropwise_store::{CachedRecommendation, ResultCache};

use crate::cli::{Cli, SoilArgs, ZoneArgs};
use crate::context::{build_engine, load_config, result_cache};
use crate::errors::invalid_coordinates;
use crate::output::OutputWriter;
use crate::output_types::CropRow;

pub async fn execute_zone(cli: &Cli, args: &ZoneArgs, output: &OutputWriter) -> Result<()> {
    let config = load_config(cli)?;
    let engine = build_engine(&config)?;

    let input = ZoneInput {
        lat: args.lat.clone().map(NumericInput::from),
        lon: args.lon.clone().map(NumericInput::from),
    };

    let recommendation = engine.recommend_zone(&input).map_err(|e| match e {
        CropwiseError::InvalidQuery(err) => invalid_coordinates(&err).into(),
        other => anyhow::Error::from(other),
    })?;

    if !args.no_save {
        save(&engine, &result_cache(&config), &recommendation, output).await;
    }

    report(&recommendation, output, cli.explain)
}

pub async fn execute_soil(cli: &Cli, args: &SoilArgs, output: &OutputWriter) -> Result<()> {
    let config = load_config(cli)?;
    let engine = build_engine(&config)?;

    let input = SoilInput {
        n: args.nitrogen.clone().map(NumericInput::from),
        p: args.phosphorus.clone().map(NumericInput::from),
        k: args.potassium.clone().map(NumericInput::from),
        ph: args.ph.clone().map(NumericInput::from),
    };

    let recommendation = engine.recommend_soil(&input);

    if !args.no_save {
        save(&engine, &result_cache(&config), &recommendation, output).await;
    }

    report(&recommendation, output, cli.explain)
}

async fn save(
    engine: &RecommendationEngine,
    cache: &dyn ResultCache,
    recommendation: &Recommendation,
    output: &OutputWriter,
) {
    let entry = CachedRecommendation::new(
        recommendation.clone(),
        engine.dataset().version().map(str::to_string),
    );

    if let Err(e) = cache.save(&entry).await {
        tracing::debug!(error = %e, "Result cache save failed");
        output.warning(format!("Could not save result: {}", e));
    }
}

/// Print a recommendation in the current output format
pub fn report(recommendation: &Recommendation, output: &OutputWriter, explain: bool) -> Result<()> {
    if output.is_json() {
        return output.result(recommendation);
    }

    match &recommendation.explanation {
        RecommendationExplanation::Zone { coordinate, .. } => {
            output.section("Zone recommendation");
            output.kv("Location", format!("{}, {}", coordinate.lat, coordinate.lon));
        }
        RecommendationExplanation::Soil { reading, .. } => {
            output.section("Soil recommendation");
            output.kv(
                "Reading",
                format!("N={} P={} K={} pH={}", reading.n, reading.p, reading.k, reading.ph),
            );
        }
    }

    if recommendation.used_fallback {
        output.warning("No crop matched this soil reading; showing the first catalog entries");
    } else if recommendation.crops.is_empty() {
        match recommendation.explanation {
            RecommendationExplanation::Zone { .. } => {
                output.info("No crop data available for this location.")
            }
            RecommendationExplanation::Soil { .. } => {
                output.info("No crop matched this soil reading.")
            }
        }
    }

    if !recommendation.crops.is_empty() {
        let rows: Vec<CropRow> = recommendation.crops.iter().map(CropRow::from).collect();
        output.table(rows)?;
    }

    if explain {
        explain_recommendation(recommendation, output);
    }

    Ok(())
}

fn explain_recommendation(recommendation: &Recommendation, output: &OutputWriter) {
    output.section("Explanation");

    match &recommendation.explanation {
        RecommendationExplanation::Zone { zones_evaluated, matched_zones, .. } => {
            output.kv("Zones evaluated", zones_evaluated);
            if matched_zones.is_empty() {
                output.kv("Matched zones", "none");
            } else {
                let list: Vec<String> = matched_zones.iter().map(|z| z.to_string()).collect();
                output.kv("Matched zones", list.join(", "));
            }
            if matched_zones.len() > 1 {
                output.info("Zones overlap here; each contributes its full crop list");
            }
        }
        RecommendationExplanation::Soil { defaulted, crops_evaluated, fallback, .. } => {
            output.kv("Crops evaluated", crops_evaluated);
            output.kv("Matched", recommendation.matched);
            output.kv("Tolerance", "±20% on N, P, K; pH within the crop's ideal range");
            if !defaulted.is_empty() {
                let fields: Vec<String> = defaulted
                    .iter()
                    .map(|f| format!("{}={}", f.label(), f.default_value()))
                    .collect();
                output.kv("Defaulted", fields.join(", "));
            }
            output.kv("Fallback policy", fallback);
        }
    }
}
