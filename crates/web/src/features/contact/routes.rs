use axum::{Router, routing::post};
use storage::SharedStore;

use super::handlers::submit_feedback;

pub fn routes() -> Router<SharedStore> {
    Router::new().route("/contact", post(submit_feedback))
}
