use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use storage::dto::run::RunnerRunView;
use utoipa::ToSchema;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[derive(Debug, Serialize, ToSchema)]
pub struct RunnerRunsResponse {
    pub runner_id: i64,
    pub username: String,
    pub country: String,
    pub runs: Vec<RunnerRunView>,
}

#[utoipa::path(
    get,
    path = "/api/runners/{id}/runs",
    params(("id" = i64, Path, description = "Runner identifier")),
    responses(
        (status = 200, description = "All runs of the runner, flagged included", body = RunnerRunsResponse),
        (status = 404, description = "No such runner")
    ),
    tag = "runners"
)]
pub async fn get_runner_runs(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let runner = services::find_runner(state.db.pool(), id).await?;
    let runs = services::runner_runs(state.db.pool(), &state.catalog, id).await?;

    Ok(Json(RunnerRunsResponse {
        runner_id: runner.runner_id,
        username: runner.username,
        country: runner.country,
        runs,
    })
    .into_response())
}
