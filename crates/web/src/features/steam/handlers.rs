use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use importer::RunKind;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::WebError;
use crate::state::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct SteamLookupQuery {
    pub steam_id: u64,
    /// "score" or "speed".
    pub kind: String,
}

/// Candidate run attributes recovered from the external feed. Acceptance
/// into storage goes through the regular submission flow.
#[derive(Debug, Serialize, ToSchema)]
pub struct SteamLookupResponse {
    pub score: i64,
    pub level: i32,
    pub loadout_id: i32,
}

#[utoipa::path(
    get,
    path = "/api/steam/lookup",
    params(SteamLookupQuery),
    responses(
        (status = 200, description = "Best observed result for the user", body = SteamLookupResponse),
        (status = 400, description = "Unknown run kind"),
        (status = 404, description = "User not inside the feed's top window"),
        (status = 502, description = "Feed unreachable or undecodable")
    ),
    tag = "steam"
)]
pub async fn steam_lookup(
    State(state): State<AppState>,
    Query(query): Query<SteamLookupQuery>,
) -> Result<Response, WebError> {
    let kind: RunKind = query.kind.parse().map_err(WebError::BadRequest)?;

    let result = state.steam.fetch_result(query.steam_id, kind).await?;

    Ok(Json(SteamLookupResponse {
        score: result.score,
        level: result.level,
        loadout_id: result.loadout_id,
    })
    .into_response())
}
