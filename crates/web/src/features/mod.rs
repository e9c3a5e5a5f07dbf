use axum::Router;
use storage::SharedStore;

use crate::error::WebError;

pub mod contact;
pub mod footprints;
pub mod game;

/// API routes bound to `store`, without docs or middleware.
pub fn router(store: SharedStore) -> Router {
    let api = Router::new()
        .merge(footprints::routes::routes())
        .merge(game::routes::routes())
        .merge(contact::routes::routes());

    Router::new()
        .nest("/api", api)
        .fallback(not_found)
        .with_state(store)
}

async fn not_found() -> WebError {
    WebError::NotFound
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header::CONTENT_TYPE},
    };
    use serde_json::Value;
    use storage::{
        MemoryStore, Store,
        error::{Result, StorageError},
        models::{Footprint, GameScore, NewFootprint, NewGameScore},
        store::{FootprintQuery, GameScoreQuery},
    };
    use tower::ServiceExt;

    use super::*;

    /// Store that has lost its connection pool.
    struct UnavailableStore;

    #[async_trait]
    impl Store for UnavailableStore {
        async fn insert_footprint(&self, _new: &NewFootprint) -> Result<Footprint> {
            Err(StorageError::Database(sqlx::Error::PoolClosed))
        }

        async fn insert_game_score(&self, _new: &NewGameScore) -> Result<GameScore> {
            Err(StorageError::Database(sqlx::Error::PoolClosed))
        }

        async fn query_footprints(&self, _query: FootprintQuery) -> Result<Vec<Footprint>> {
            Err(StorageError::Database(sqlx::Error::PoolClosed))
        }

        async fn query_game_scores(&self, _query: GameScoreQuery) -> Result<Vec<GameScore>> {
            Err(StorageError::Database(sqlx::Error::PoolClosed))
        }

        async fn count_footprints(&self) -> Result<i64> {
            Err(StorageError::Database(sqlx::Error::PoolClosed))
        }

        async fn count_game_scores(&self) -> Result<i64> {
            Err(StorageError::Database(sqlx::Error::PoolClosed))
        }
    }

    fn app() -> (Router, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        (router(store.clone()), store)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    fn form(uri: &str, body: &'static str) -> Request<Body> {
        Request::post(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn calculator_page_starts_empty() {
        let (app, _) = app();

        let (status, body) = send(&app, get("/api/calculator")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["result"].is_null());
        assert_eq!(body["history"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn calculator_submission_returns_total_and_history() {
        let (app, store) = app();

        let (status, body) = send(
            &app,
            form(
                "/api/calculator",
                "name=Alice&electricity=100&water=200&travel=50&waste=10",
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["result"], 111.56);
        assert_eq!(body["breakdown"]["electricity"], 82.0);
        assert_eq!(body["record"]["name"], "Alice");
        assert_eq!(body["history"].as_array().map(Vec::len), Some(1));
        assert_eq!(
            body["message"],
            footprints::services::FOOTPRINT_SAVED
        );
        assert_eq!(store.count_footprints().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn malformed_quantities_count_as_zero() {
        let (app, _) = app();

        let (status, body) = send(
            &app,
            form("/api/calculator", "electricity=lots&water=-5&travel=&name=+"),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["result"], 0.0);
        assert_eq!(body["record"]["name"], "Anonymous");
        assert_eq!(body["record"]["water"], 0.0);
    }

    #[tokio::test]
    async fn huge_quantity_keeps_its_magnitude() {
        let (app, _) = app();

        let (status, body) = send(&app, form("/api/calculator", "electricity=1e30")).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["result"], 8.2e29);
        assert_eq!(body["breakdown"]["electricity"], 8.2e29);
    }

    #[tokio::test]
    async fn storage_failure_is_a_500() {
        let app = router(Arc::new(UnavailableStore));

        let (status, body) = send(
            &app,
            form("/api/calculator", "name=Alice&electricity=100"),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({ "error": "An internal error occurred" }));

        let (status, _) = send(&app, form("/api/game", "name=Bob&score=42")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let (status, _) = send(&app, get("/api/leaderboard")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn lowest_footprints_are_limited_and_sorted() {
        let (app, _) = app();
        for body in ["electricity=30", "electricity=10", "electricity=20"] {
            send(&app, form("/api/calculator", body)).await;
        }

        let (status, body) = send(&app, get("/api/footprints/lowest?limit=2")).await;

        assert_eq!(status, StatusCode::OK);
        let totals: Vec<f64> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|f| f["total_co2"].as_f64().unwrap())
            .collect();
        assert_eq!(totals, vec![8.2, 16.4]);
    }

    #[tokio::test]
    async fn nameless_score_is_not_recorded() {
        let (app, store) = app();

        let (status, body) = send(&app, form("/api/game", "name=&score=999")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recorded"], false);
        assert_eq!(body["message"], game::services::SCORE_SKIPPED);
        assert_eq!(store.count_game_scores().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn best_score_tops_the_leaderboard() {
        let (app, _) = app();
        send(&app, form("/api/game", "name=Ann&score=7")).await;
        let (status, saved) = send(&app, form("/api/game", "name=Bob&score=42")).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(saved["message"], game::services::SCORE_SAVED);

        let (_, body) = send(&app, get("/api/leaderboard?limit=1")).await;
        assert_eq!(body.as_array().map(Vec::len), Some(1));
        assert_eq!(body[0]["name"], "Bob");
        assert_eq!(body[0]["score"], 42);

        let (_, view) = send(&app, get("/api/game")).await;
        assert_eq!(view["total_scores"], 2);
        assert_eq!(view["leaderboard"][1]["name"], "Ann");
    }

    #[tokio::test]
    async fn malformed_score_defaults_to_zero() {
        let (app, _) = app();

        let (_, body) = send(&app, form("/api/game", "name=Cid&score=abc")).await;

        assert_eq!(body["recorded"], true);
        assert_eq!(body["score"]["score"], 0);
    }

    #[tokio::test]
    async fn out_of_range_limit_is_rejected() {
        let (app, _) = app();

        let (status, body) = send(&app, get("/api/leaderboard?limit=0")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Validation failed");
    }

    #[tokio::test]
    async fn feedback_is_acknowledged() {
        let (app, _) = app();

        let (status, body) = send(
            &app,
            form("/api/contact", "name=Dee&email=dee%40example.com&message=hi"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], contact::handlers::FEEDBACK_RECEIVED);
    }

    #[tokio::test]
    async fn unknown_route_is_json_404() {
        let (app, _) = app();

        let (status, body) = send(&app, get("/api/nope")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Resource not found");
    }
}
