use storage::{
    Store,
    dto::{
        common::DEFAULT_TOP_N,
        footprint::{BreakdownResponse, CalculatorView},
    },
    error::Result,
    input::FootprintInput,
    models::Footprint,
    services::footprint,
};

pub const FOOTPRINT_SAVED: &str = "Your footprint has been calculated and saved!";

/// Calculator page before anything was submitted
pub async fn calculator_view(store: &dyn Store) -> Result<CalculatorView> {
    let history = footprint::top_lowest(store, DEFAULT_TOP_N).await?;

    Ok(CalculatorView {
        result: None,
        breakdown: None,
        record: None,
        history,
        message: None,
    })
}

/// Estimate, persist, then reload the history so it includes the new row
pub async fn submit_footprint(store: &dyn Store, input: &FootprintInput) -> Result<CalculatorView> {
    let breakdown = footprint::breakdown(input);
    let record = footprint::estimate(store, input).await?;
    let history = footprint::top_lowest(store, DEFAULT_TOP_N).await?;

    Ok(CalculatorView {
        result: Some(record.total_co2),
        breakdown: Some(BreakdownResponse::from(&breakdown)),
        record: Some(record),
        history,
        message: Some(FOOTPRINT_SAVED.to_string()),
    })
}

pub async fn lowest_footprints(store: &dyn Store, limit: u32) -> Result<Vec<Footprint>> {
    footprint::top_lowest(store, limit).await
}
