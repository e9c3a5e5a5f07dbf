use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Footprint;
use crate::services::footprint::Breakdown;

/// Calculator form as submitted by the browser. Every field is optional text;
/// coercion happens in [`crate::input::FootprintInput::from_form`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct FootprintForm {
    #[serde(default)]
    pub name: Option<String>,
    /// kWh
    #[serde(default)]
    pub electricity: Option<String>,
    /// litres
    #[serde(default)]
    pub water: Option<String>,
    /// km
    #[serde(default)]
    pub travel: Option<String>,
    /// kg
    #[serde(default)]
    pub waste: Option<String>,
}

/// Per-category emissions in kg CO2.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BreakdownResponse {
    pub electricity: f64,
    pub water: f64,
    pub travel: f64,
    pub waste: f64,
}

impl From<&Breakdown> for BreakdownResponse {
    fn from(breakdown: &Breakdown) -> Self {
        Self {
            electricity: breakdown.co2_electricity,
            water: breakdown.co2_water,
            travel: breakdown.co2_travel,
            waste: breakdown.co2_waste,
        }
    }
}

/// Everything the calculator page renders.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CalculatorView {
    /// Total of the submission just made, absent on a plain page view.
    pub result: Option<f64>,
    pub breakdown: Option<BreakdownResponse>,
    pub record: Option<Footprint>,
    /// Lowest footprints recorded so far.
    pub history: Vec<Footprint>,
    pub message: Option<String>,
}
