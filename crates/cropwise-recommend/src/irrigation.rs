use serde::{Deserialize, Serialize};
use std::fmt;

/// Soil moisture below this percentage calls for irrigation
pub const IRRIGATION_MOISTURE_THRESHOLD: f64 = 40.0;

pub const HIGH_HEAT_ABOVE_C: f64 = 35.0;
pub const COOL_BELOW_C: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IrrigationAction {
    Irrigate,
    NoIrrigation,
}

impl fmt::Display for IrrigationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IrrigationAction::Irrigate => write!(f, "Irrigate"),
            IrrigationAction::NoIrrigation => write!(f, "No Irrigation"),
        }
    }
}

/// Temperature band behind an irrigation tip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TemperatureBand {
    HighHeat,
    Moderate,
    Cool,
}

impl TemperatureBand {
    /// `None` only for a NaN reading
    pub fn classify(temperature_c: f64) -> Option<Self> {
        if temperature_c > HIGH_HEAT_ABOVE_C {
            Some(TemperatureBand::HighHeat)
        } else if temperature_c >= COOL_BELOW_C {
            Some(TemperatureBand::Moderate)
        } else if temperature_c < COOL_BELOW_C {
            Some(TemperatureBand::Cool)
        } else {
            None
        }
    }

    pub fn tip(&self) -> &'static str {
        match self {
            TemperatureBand::HighHeat => {
                "High heat detected. Water your crops early morning or late evening to reduce evaporation."
            }
            TemperatureBand::Moderate => "Moderate temperature. Regular irrigation is sufficient.",
            TemperatureBand::Cool => "Cool conditions. Irrigation may not be urgently required.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IrrigationAdvice {
    pub action: IrrigationAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub band: Option<TemperatureBand>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

/// Advise on irrigation from a soil moisture percentage and an optional
/// air temperature. Without a temperature there is no tip.
pub fn advise(soil_moisture_pct: f64, temperature_c: Option<f64>) -> IrrigationAdvice {
    let action = if soil_moisture_pct < IRRIGATION_MOISTURE_THRESHOLD {
        IrrigationAction::Irrigate
    } else {
        IrrigationAction::NoIrrigation
    };

    let band = temperature_c.and_then(TemperatureBand::classify);

    IrrigationAdvice { action, band, tip: band.map(|b| b.tip().to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moisture_threshold() {
        assert_eq!(advise(39.9, None).action, IrrigationAction::Irrigate);
        assert_eq!(advise(40.0, None).action, IrrigationAction::NoIrrigation);
        assert_eq!(advise(45.0, None).action, IrrigationAction::NoIrrigation);
    }

    #[test]
    fn test_temperature_bands() {
        assert_eq!(advise(45.0, Some(36.0)).band, Some(TemperatureBand::HighHeat));
        assert_eq!(advise(45.0, Some(35.0)).band, Some(TemperatureBand::Moderate));
        assert_eq!(advise(45.0, Some(25.0)).band, Some(TemperatureBand::Moderate));
        assert_eq!(advise(45.0, Some(24.9)).band, Some(TemperatureBand::Cool));
        assert_eq!(advise(45.0, Some(f64::NAN)).band, None);
    }

    #[test]
    fn test_no_temperature_means_no_tip() {
        let advice = advise(30.0, None);
        assert!(advice.band.is_none());
        assert!(advice.tip.is_none());

        let json = serde_json::to_value(&advice).unwrap();
        assert_eq!(json, serde_json::json!({"action": "irrigate"}));
    }

    #[test]
    fn test_tip_text() {
        let advice = advise(50.0, Some(38.0));
        assert!(advice.tip.unwrap().starts_with("High heat"));
        assert_eq!(advice.action.to_string(), "No Irrigation");
    }
}
