use anyhow::Result;
use console::style;
use cropwise_recommend::{advise, IrrigationAction};

use crate::cli::IrrigateArgs;
use crate::errors::invalid_moisture;
use crate::output::OutputWriter;

pub fn execute(args: &IrrigateArgs, output: &OutputWriter) -> Result<()> {
    if !args.moisture.is_finite() || !(0.0..=100.0).contains(&args.moisture) {
        return Err(invalid_moisture(args.moisture).into());
    }

    let advice = advise(args.moisture, args.temperature);

    if output.is_json() {
        return output.result(&advice);
    }

    output.section("Irrigation");
    output.kv("Soil Moisture", format!("{}%", args.moisture));
    match args.temperature {
        Some(t) => output.kv("Temperature", format!("{}°C", t)),
        None => output.kv("Temperature", "--"),
    }

    match advice.action {
        IrrigationAction::Irrigate => output.kv("Recommendation", style(advice.action).yellow().bold()),
        IrrigationAction::NoIrrigation => output.kv("Recommendation", style(advice.action).green()),
    }

    if let Some(tip) = &advice.tip {
        output.info(tip);
    }

    Ok(())
}
