use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use storage::dto::run::CreateRunRequest;
use storage::error::StorageError;
use storage::models::Run;
use storage::services::moderation::FlagOutcome;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[derive(Debug, Deserialize, ToSchema)]
pub struct FlagRunRequest {
    /// Human-readable removal reason shown to the runner.
    pub reason: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreateRunResponse {
    pub run_id: i64,
    /// Rank the new run holds at creation time; computed, not stored.
    pub rank: i64,
}

#[utoipa::path(
    get,
    path = "/api/runs/{id}",
    params(("id" = i64, Path, description = "Run identifier")),
    responses(
        (status = 200, description = "The stored run", body = Run),
        (status = 404, description = "No such run")
    ),
    tag = "runs"
)]
pub async fn get_run(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    let run = services::find_run(state.db.pool(), id).await?;
    Ok(Json(run).into_response())
}

#[utoipa::path(
    post,
    path = "/api/runs",
    request_body = CreateRunRequest,
    responses(
        (status = 201, description = "Run created", body = CreateRunResponse),
        (status = 400, description = "Missing mandatory field or unresolvable reference")
    ),
    tag = "runs"
)]
pub async fn create_run(
    State(state): State<AppState>,
    Json(request): Json<CreateRunRequest>,
) -> Result<Response, WebError> {
    request.validate()?;

    // references must resolve in the catalogs before anything is stored
    let category = state
        .catalog
        .category_by_id(request.category_id)
        .ok_or_else(|| WebError::BadRequest(format!("no category with id {}", request.category_id)))?;
    if state.catalog.loadout_by_id(request.loadout_id).is_none() {
        return Err(WebError::BadRequest(format!(
            "no loadout with id {}",
            request.loadout_id
        )));
    }

    let run_id = services::create_run(state.db.pool(), &request)
        .await
        .map_err(|e| {
            if e.is_foreign_key_violation() {
                WebError::BadRequest(format!("no runner with id {}", request.runner_id))
            } else {
                WebError::Storage(e)
            }
        })?;

    let rank = storage::repository::RunRepository::new(state.db.pool())
        .hypothetical_rank(request.score, category)
        .await?;

    Ok((StatusCode::CREATED, Json(CreateRunResponse { run_id, rank })).into_response())
}

#[utoipa::path(
    post,
    path = "/api/runs/{id}/flag",
    params(("id" = i64, Path, description = "Run identifier")),
    request_body = FlagRunRequest,
    responses(
        (status = 200, description = "Run flagged; notification status attached", body = FlagOutcome),
        (status = 400, description = "Empty reason"),
        (status = 404, description = "No such run")
    ),
    tag = "runs"
)]
pub async fn flag_run(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<FlagRunRequest>,
) -> Result<Response, WebError> {
    let outcome = services::flag_run(
        state.db.pool(),
        &state.catalog,
        id,
        &request.reason,
        state.mailer.as_ref(),
    )
    .await?;

    Ok(Json(outcome).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/runs/{id}",
    params(("id" = i64, Path, description = "Run identifier")),
    responses(
        (status = 200, description = "Run deleted"),
        (status = 404, description = "No such run")
    ),
    tag = "runs"
)]
pub async fn delete_run(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    services::delete_run(state.db.pool(), &state.catalog, id).await?;
    Ok(Json(serde_json::json!({ "success": true })).into_response())
}
