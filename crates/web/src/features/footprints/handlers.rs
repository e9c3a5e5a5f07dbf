use axum::{
    Form, Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    SharedStore,
    dto::{
        common::LimitParams,
        footprint::{CalculatorView, FootprintForm},
    },
    input::FootprintInput,
    models::Footprint,
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/calculator",
    responses(
        (status = 200, description = "Calculator view with the lowest footprints so far", body = CalculatorView)
    ),
    tag = "footprints"
)]
pub async fn get_calculator(State(store): State<SharedStore>) -> Result<Response, WebError> {
    let view = services::calculator_view(store.as_ref()).await?;

    Ok(Json(view).into_response())
}

#[utoipa::path(
    post,
    path = "/api/calculator",
    request_body(content = FootprintForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Footprint calculated and saved", body = CalculatorView)
    ),
    tag = "footprints"
)]
pub async fn submit_footprint(
    State(store): State<SharedStore>,
    Form(form): Form<FootprintForm>,
) -> Result<Response, WebError> {
    let input = FootprintInput::from_form(&form);
    let view = services::submit_footprint(store.as_ref(), &input).await?;

    Ok((StatusCode::CREATED, Json(view)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/footprints/lowest",
    params(LimitParams),
    responses(
        (status = 200, description = "Lowest footprints, ascending", body = Vec<Footprint>),
        (status = 400, description = "Invalid limit")
    ),
    tag = "footprints"
)]
pub async fn list_lowest_footprints(
    State(store): State<SharedStore>,
    Query(params): Query<LimitParams>,
) -> Result<Response, WebError> {
    params.validate()?;

    let footprints = services::lowest_footprints(store.as_ref(), params.limit).await?;

    Ok(Json(footprints).into_response())
}
