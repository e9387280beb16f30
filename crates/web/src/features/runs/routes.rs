use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

use super::handlers::{create_run, delete_run, flag_run, get_run};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_run))
        .route("/:id", get(get_run))
        .route("/:id", delete(delete_run))
        .route("/:id/flag", post(flag_run))
}
