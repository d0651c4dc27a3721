use serde::{Deserialize, Serialize};
use validator::Validate;

/// Fuel and carbon prices in force for a single dispatch computation.
///
/// Field names on the wire follow the upstream market feed
/// (`gas(euro/MWh)`, `kerosine(euro/MWh)`, `co2(euro/ton)`, `wind(%)`).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FuelPrices {
    #[serde(rename = "gas(euro/MWh)")]
    #[validate(range(min = 0.0))]
    pub gas_euro_per_mwh: f64,

    #[serde(rename = "kerosine(euro/MWh)")]
    #[validate(range(min = 0.0))]
    pub kerosine_euro_per_mwh: f64,

    #[serde(rename = "co2(euro/ton)")]
    #[validate(range(min = 0))]
    pub co2_euro_per_ton: i64,

    /// Current wind availability as a percentage of installed capacity.
    #[serde(rename = "wind(%)")]
    #[validate(range(min = 0, max = 100))]
    pub wind_percent: i64,
}

impl FuelPrices {
    /// Wind availability as a fraction in `[0, 1]`.
    pub fn wind_fraction(&self) -> f64 {
        self.wind_percent as f64 / 100.0
    }
}
