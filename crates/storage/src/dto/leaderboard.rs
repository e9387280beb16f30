use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Category;

/// Display identity of a run's owner, joined in at leaderboard read time.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RunnerInfo {
    pub runner_id: i64,
    pub username: String,
    pub country: String,
}

/// One leaderboard row: a visible run with its 1-based rank assigned from
/// sort position. Rank is computed here and nowhere persisted.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RankedRun {
    pub rank: i64,
    pub run_id: i64,
    pub score: i64,
    pub level: i32,
    pub link: String,
    pub platform: i32,
    pub loadout_id: i32,
    pub comment: String,
    pub submitted_at: DateTime<Utc>,
    pub runner: RunnerInfo,
}

/// The current best run of one category.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WorldRecord {
    pub category: Category,
    pub run: RankedRun,
}

/// World records partitioned into the two fixed front-page groups,
/// catalog order preserved within each.
#[derive(Debug, Serialize, ToSchema)]
pub struct RecordsByClass {
    pub main: Vec<WorldRecord>,
    pub challenge: Vec<WorldRecord>,
}
