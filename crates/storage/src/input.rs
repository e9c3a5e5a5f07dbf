//! Coercion of raw request fields into typed inputs.
//!
//! Nothing in here fails: malformed values fall back to zero and blank names
//! become `None`, leaving the callers to decide what a missing name means.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use crate::dto::footprint::FootprintForm;
use crate::dto::game::ScoreForm;
use crate::models::MAX_NAME_LEN;
use crate::services::decimal_to_f64;

/// A non-negative amount of some resource.
///
/// Values inside the `Decimal` range are kept exact; larger ones are carried
/// as `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quantity {
    Exact(Decimal),
    Float(f64),
}

impl Quantity {
    pub const ZERO: Self = Self::Exact(Decimal::ZERO);

    pub fn to_f64(self) -> f64 {
        match self {
            Self::Exact(value) => decimal_to_f64(value),
            Self::Float(value) => value,
        }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<Decimal> for Quantity {
    fn from(value: Decimal) -> Self {
        Self::Exact(value)
    }
}

/// Parses a quantity, exactly when it fits a `Decimal`. Missing,
/// non-numeric, non-finite and negative values all become zero.
pub fn coerce_quantity(raw: Option<&str>) -> Quantity {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Quantity::ZERO;
    };

    if let Ok(value) = Decimal::from_str(raw).or_else(|_| Decimal::from_scientific(raw)) {
        return if value.is_sign_positive() {
            Quantity::Exact(value.normalize())
        } else {
            Quantity::ZERO
        };
    }

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Decimal::from_f64(value)
            .map(|exact| Quantity::Exact(exact.normalize()))
            .unwrap_or(Quantity::Float(value)),
        _ => Quantity::ZERO,
    }
}

/// Parses an integer score; anything else is zero.
pub fn coerce_score(raw: Option<&str>) -> i64 {
    raw.map(str::trim)
        .and_then(|s| s.parse::<i64>().ok())
        .unwrap_or_default()
}

/// Trims and truncates a name. Blank input yields `None`.
pub fn coerce_name(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(MAX_NAME_LEN).collect())
}

/// Typed calculator input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FootprintInput {
    pub name: Option<String>,
    pub electricity: Quantity,
    pub water: Quantity,
    pub travel: Quantity,
    pub waste: Quantity,
}

impl FootprintInput {
    pub fn from_form(form: &FootprintForm) -> Self {
        Self {
            name: coerce_name(form.name.as_deref()),
            electricity: coerce_quantity(form.electricity.as_deref()),
            water: coerce_quantity(form.water.as_deref()),
            travel: coerce_quantity(form.travel.as_deref()),
            waste: coerce_quantity(form.waste.as_deref()),
        }
    }
}

/// Typed game-score input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoreInput {
    pub name: Option<String>,
    pub score: i64,
}

impl ScoreInput {
    pub fn from_form(form: &ScoreForm) -> Self {
        Self {
            name: coerce_name(form.name.as_deref()),
            score: coerce_score(form.score.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact(s: &str) -> Quantity {
        Quantity::Exact(Decimal::from_str(s).unwrap())
    }

    #[test]
    fn quantities_parse_as_exact_decimals() {
        assert_eq!(coerce_quantity(Some("100")), exact("100"));
        assert_eq!(coerce_quantity(Some(" 0.1 ")), exact("0.1"));
        assert_eq!(coerce_quantity(Some("1.5e2")), exact("150"));
    }

    #[test]
    fn bad_quantities_default_to_zero() {
        assert_eq!(coerce_quantity(None), Quantity::ZERO);
        assert_eq!(coerce_quantity(Some("")), Quantity::ZERO);
        assert_eq!(coerce_quantity(Some("lots")), Quantity::ZERO);
        assert_eq!(coerce_quantity(Some("NaN")), Quantity::ZERO);
        assert_eq!(coerce_quantity(Some("inf")), Quantity::ZERO);
        assert_eq!(coerce_quantity(Some("-12.5")), Quantity::ZERO);
        assert_eq!(coerce_quantity(Some("-1e30")), Quantity::ZERO);
    }

    #[test]
    fn quantities_beyond_decimal_range_are_kept() {
        assert_eq!(coerce_quantity(Some("1e30")), Quantity::Float(1e30));
        assert_eq!(
            coerce_quantity(Some("123456789012345678901234567890")),
            Quantity::Float(1.2345678901234568e29)
        );
        assert_eq!(coerce_quantity(Some("1e30")).to_f64(), 1e30);
    }

    #[test]
    fn scores_only_accept_integers() {
        assert_eq!(coerce_score(Some("42")), 42);
        assert_eq!(coerce_score(Some(" -7 ")), -7);
        assert_eq!(coerce_score(Some("12.5")), 0);
        assert_eq!(coerce_score(Some("abc")), 0);
        assert_eq!(coerce_score(None), 0);
    }

    #[test]
    fn names_are_trimmed_and_capped() {
        assert_eq!(coerce_name(Some("  Alice ")), Some("Alice".to_string()));
        assert_eq!(coerce_name(Some("   ")), None);
        assert_eq!(coerce_name(None), None);

        let long = "x".repeat(150);
        assert_eq!(coerce_name(Some(&long)).map(|n| n.len()), Some(MAX_NAME_LEN));
    }

    #[test]
    fn score_form_with_missing_fields() {
        let form = ScoreForm {
            name: Some("Bob".to_string()),
            score: None,
        };
        assert_eq!(
            ScoreInput::from_form(&form),
            ScoreInput {
                name: Some("Bob".to_string()),
                score: 0,
            }
        );
    }
}
