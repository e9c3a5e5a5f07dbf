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
        game::{GameView, ScoreForm, SubmissionResponse},
    },
    input::ScoreInput,
    models::GameScore,
    services::ledger::Submission,
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/game",
    responses(
        (status = 200, description = "Game view with the top scores", body = GameView)
    ),
    tag = "game"
)]
pub async fn get_game(State(store): State<SharedStore>) -> Result<Response, WebError> {
    let view = services::game_view(store.as_ref()).await?;

    Ok(Json(view).into_response())
}

#[utoipa::path(
    post,
    path = "/api/game",
    request_body(content = ScoreForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Score saved", body = SubmissionResponse),
        (status = 200, description = "No name given, score not saved", body = SubmissionResponse)
    ),
    tag = "game"
)]
pub async fn submit_score(
    State(store): State<SharedStore>,
    Form(form): Form<ScoreForm>,
) -> Result<Response, WebError> {
    let input = ScoreInput::from_form(&form);

    let response = match services::submit_score(store.as_ref(), &input).await? {
        Submission::Recorded(score) => (
            StatusCode::CREATED,
            Json(SubmissionResponse {
                recorded: true,
                score: Some(score),
                message: Some(services::SCORE_SAVED.to_string()),
            }),
        ),
        Submission::Skipped => (
            StatusCode::OK,
            Json(SubmissionResponse {
                recorded: false,
                score: None,
                message: Some(services::SCORE_SKIPPED.to_string()),
            }),
        ),
    };

    Ok(response.into_response())
}

#[utoipa::path(
    get,
    path = "/api/leaderboard",
    params(LimitParams),
    responses(
        (status = 200, description = "Highest scores, descending", body = Vec<GameScore>),
        (status = 400, description = "Invalid limit")
    ),
    tag = "game"
)]
pub async fn get_leaderboard(
    State(store): State<SharedStore>,
    Query(params): Query<LimitParams>,
) -> Result<Response, WebError> {
    params.validate()?;

    let scores = services::leaderboard(store.as_ref(), params.limit).await?;

    Ok(Json(scores).into_response())
}
