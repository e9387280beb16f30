use axum::{Router, routing::get};

use crate::state::AppState;

use super::handlers::{get_leaderboard, get_hypothetical_rank, get_world_records};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/records", get(get_world_records))
        .route("/:abbr", get(get_leaderboard))
        .route("/:abbr/hypothetical", get(get_hypothetical_rank))
}
