use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use storage::catalog::Catalog;
use storage::dto::leaderboard::{RankedRun, RecordsByClass, RunnerInfo};
use storage::error::StorageError;
use storage::format;
use storage::models::Category;
use utoipa::{IntoParams, ToSchema};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[derive(Debug, Deserialize, IntoParams)]
pub struct LeaderboardQuery {
    /// Maximum number of rows; omit or 0 for the full board.
    #[serde(default)]
    pub limit: i64,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct HypotheticalQuery {
    /// Candidate result value: points or milliseconds per category goal.
    pub score: i64,
}

/// One rendered leaderboard row. Display strings come from the storage
/// formatting helpers; consumers must not re-derive them.
#[derive(Debug, Serialize, ToSchema)]
pub struct LeaderboardEntry {
    pub rank: i64,
    pub run_id: i64,
    pub runner: RunnerInfo,
    pub score: i64,
    pub display_score: String,
    pub level: i32,
    pub display_level: String,
    pub link: String,
    pub platform: i32,
    pub loadout: Option<String>,
    pub comment: String,
    pub submitted: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LeaderboardResponse {
    pub category: Category,
    pub entries: Vec<LeaderboardEntry>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HypotheticalRankResponse {
    pub score: i64,
    pub rank: i64,
}

fn render_entry(run: RankedRun, category: &Category, catalog: &Catalog) -> LeaderboardEntry {
    LeaderboardEntry {
        rank: run.rank,
        run_id: run.run_id,
        runner: run.runner,
        score: run.score,
        display_score: format::score(run.score, category.goal),
        level: run.level,
        display_level: format::level(run.level),
        link: run.link,
        platform: run.platform,
        loadout: catalog.loadout_by_id(run.loadout_id).map(|l| l.name.clone()),
        comment: run.comment,
        submitted: format::date(&run.submitted_at),
    }
}

#[utoipa::path(
    get,
    path = "/api/leaderboards/{abbr}",
    params(
        ("abbr" = String, Path, description = "Category abbreviation"),
        LeaderboardQuery
    ),
    responses(
        (status = 200, description = "Ranked leaderboard for the category", body = LeaderboardResponse),
        (status = 404, description = "No such category")
    ),
    tag = "leaderboards"
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Path(abbr): Path<String>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Response, WebError> {
    let category = state
        .catalog
        .category_by_abbr(&abbr)
        .ok_or(StorageError::NotFound)?
        .clone();

    let runs = services::leaderboard(state.db.pool(), &category, query.limit).await?;
    let entries = runs
        .into_iter()
        .map(|run| render_entry(run, &category, &state.catalog))
        .collect();

    Ok(Json(LeaderboardResponse { category, entries }).into_response())
}

#[utoipa::path(
    get,
    path = "/api/leaderboards/{abbr}/hypothetical",
    params(
        ("abbr" = String, Path, description = "Category abbreviation"),
        HypotheticalQuery
    ),
    responses(
        (status = 200, description = "Rank the result would achieve", body = HypotheticalRankResponse),
        (status = 404, description = "No such category")
    ),
    tag = "leaderboards"
)]
pub async fn get_hypothetical_rank(
    State(state): State<AppState>,
    Path(abbr): Path<String>,
    Query(query): Query<HypotheticalQuery>,
) -> Result<Response, WebError> {
    let category = state
        .catalog
        .category_by_abbr(&abbr)
        .ok_or(StorageError::NotFound)?;

    let rank = services::hypothetical_rank(state.db.pool(), query.score, category).await?;

    Ok(Json(HypotheticalRankResponse {
        score: query.score,
        rank,
    })
    .into_response())
}

#[utoipa::path(
    get,
    path = "/api/leaderboards/records",
    responses(
        (status = 200, description = "Current world records grouped main/challenge", body = RecordsByClass),
        (status = 500, description = "A category has no eligible runs")
    ),
    tag = "leaderboards"
)]
pub async fn get_world_records(State(state): State<AppState>) -> Result<Response, WebError> {
    let records = services::world_records(state.db.pool(), &state.catalog).await?;
    Ok(Json(records).into_response())
}
