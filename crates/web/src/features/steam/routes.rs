use axum::{Router, routing::get};

use crate::state::AppState;

use super::handlers::steam_lookup;

pub fn routes() -> Router<AppState> {
    Router::new().route("/lookup", get(steam_lookup))
}
