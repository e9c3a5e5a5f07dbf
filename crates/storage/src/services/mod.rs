use rust_decimal::Decimal;

pub mod footprint;
pub mod ledger;

/// Converts through the decimal's text form so the result is the `f64`
/// nearest to the exact value.
pub fn decimal_to_f64(decimal: Decimal) -> f64 {
    decimal.to_string().parse().unwrap_or(0.0)
}
