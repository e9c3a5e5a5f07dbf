use axum::{Router, routing::get};
use storage::SharedStore;

use super::handlers::{get_calculator, list_lowest_footprints, submit_footprint};

pub fn routes() -> Router<SharedStore> {
    Router::new()
        .route("/calculator", get(get_calculator).post(submit_footprint))
        .route("/footprints/lowest", get(list_lowest_footprints))
}
