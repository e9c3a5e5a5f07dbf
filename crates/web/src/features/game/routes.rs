use axum::{Router, routing::get};
use storage::SharedStore;

use super::handlers::{get_game, get_leaderboard, submit_score};

pub fn routes() -> Router<SharedStore> {
    Router::new()
        .route("/game", get(get_game).post(submit_score))
        .route("/leaderboard", get(get_leaderboard))
}
