use axum::{Router, routing::get};

use crate::state::AppState;

use super::handlers::get_runner_runs;

pub fn routes() -> Router<AppState> {
    Router::new().route("/:id/runs", get(get_runner_runs))
}
