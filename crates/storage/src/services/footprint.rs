use std::str::FromStr;

use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};

use super::decimal_to_f64;
use crate::error::Result;
use crate::input::{FootprintInput, Quantity};
use crate::models::{Footprint, NewFootprint};
use crate::store::{FootprintQuery, Store};

/// kg CO2 per kWh of electricity.
pub const ELECTRICITY_FACTOR: Decimal = Decimal::from_parts(82, 0, 0, false, 2);
/// kg CO2 per litre of water.
pub const WATER_FACTOR: Decimal = Decimal::from_parts(3, 0, 0, false, 4);
/// kg CO2 per km travelled.
pub const TRAVEL_FACTOR: Decimal = Decimal::from_parts(21, 0, 0, false, 2);
/// kg CO2 per kg of waste.
pub const WASTE_FACTOR: Decimal = Decimal::from_parts(19, 0, 0, false, 1);

/// Name stored when a calculator submission has none.
pub const ANONYMOUS: &str = "Anonymous";

/// Unrounded per-category emissions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakdown {
    pub co2_electricity: f64,
    pub co2_water: f64,
    pub co2_travel: f64,
    pub co2_waste: f64,
}

fn weighted(input: &FootprintInput) -> [(Quantity, Decimal); 4] {
    [
        (input.electricity, ELECTRICITY_FACTOR),
        (input.water, WATER_FACTOR),
        (input.travel, TRAVEL_FACTOR),
        (input.waste, WASTE_FACTOR),
    ]
}

pub fn breakdown(input: &FootprintInput) -> Breakdown {
    let [electricity, water, travel, waste] = weighted(input).map(|term| {
        exact_sum(&[term])
            .map(decimal_to_f64)
            .unwrap_or_else(|| scaled_sum(&[term]))
    });

    Breakdown {
        co2_electricity: electricity,
        co2_water: water,
        co2_travel: travel,
        co2_waste: waste,
    }
}

/// Total emissions rounded to two places, midpoints rounded up.
///
/// Sums that fit a `Decimal` are computed exactly. Larger ones fall back to
/// `f64`, where they are already whole numbers.
pub fn total_co2(input: &FootprintInput) -> f64 {
    let terms = weighted(input);

    match exact_sum(&terms) {
        Some(sum) => decimal_to_f64(
            sum.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        ),
        None => scaled_sum(&terms),
    }
}

/// `None` when a quantity is out of `Decimal` range or the arithmetic overflows.
fn exact_sum(terms: &[(Quantity, Decimal)]) -> Option<Decimal> {
    terms
        .iter()
        .try_fold(Decimal::ZERO, |total, (quantity, factor)| match quantity {
            Quantity::Exact(value) => total.checked_add(value.checked_mul(*factor)?),
            Quantity::Float(_) => None,
        })
}

/// Splits a positive float into its shortest decimal mantissa and exponent.
fn scientific(value: f64) -> Option<(Decimal, i32)> {
    let text = format!("{value:e}");
    let (mantissa, exponent) = text.split_once('e')?;
    Some((Decimal::from_str(mantissa).ok()?, exponent.parse().ok()?))
}

/// Multiplies the mantissas exactly and leaves a single `f64` rounding for
/// the end, so `1e30 * 0.82` comes out as `8.2e29`.
fn scaled_sum(terms: &[(Quantity, Decimal)]) -> f64 {
    let parts: Vec<(Decimal, i32)> = terms
        .iter()
        .filter_map(|(quantity, factor)| {
            let value = quantity.to_f64();
            if value <= 0.0 {
                return None;
            }
            scientific(value).map(|(mantissa, exponent)| (mantissa * *factor, exponent))
        })
        .collect();

    let Some(top) = parts.iter().map(|(_, exponent)| *exponent).max() else {
        return 0.0;
    };

    // Terms more than 28 orders of magnitude below the largest vanish.
    let mantissa = parts
        .iter()
        .filter_map(|(mantissa, exponent)| {
            let shift = u32::try_from(top - exponent).ok().filter(|s| *s <= 28)?;
            Some(*mantissa * Decimal::new(1, shift))
        })
        .fold(Decimal::ZERO, |acc, term| acc + term);

    format!("{mantissa}e{top}")
        .parse::<f64>()
        .map(|total| total.min(f64::MAX))
        .unwrap_or(f64::MAX)
}

/// Computes the footprint for `input` and appends it to the store.
pub async fn estimate(store: &dyn Store, input: &FootprintInput) -> Result<Footprint> {
    let new = NewFootprint {
        name: input
            .name
            .clone()
            .unwrap_or_else(|| ANONYMOUS.to_string()),
        electricity: input.electricity.to_f64(),
        water: input.water.to_f64(),
        travel: input.travel.to_f64(),
        waste: input.waste.to_f64(),
        total_co2: total_co2(input),
        submitted_at: Utc::now(),
    };

    let footprint = store.insert_footprint(&new).await?;
    tracing::info!(
        id = footprint.id,
        total_co2 = footprint.total_co2,
        "Footprint recorded"
    );

    Ok(footprint)
}

/// Up to `n` footprints, lowest total first.
pub async fn top_lowest(store: &dyn Store, n: u32) -> Result<Vec<Footprint>> {
    if n == 0 {
        return Ok(Vec::new());
    }
    store.query_footprints(FootprintQuery::lowest(n)).await
}
