use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Runner {
    pub runner_id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub email: String,
    pub country: String,
    pub steam_id: i64,
    /// Mail-me-when-flagged preference. Not to be confused with the
    /// moderation flag on a run.
    pub email_on_flag: bool,
    pub created_at: DateTime<Utc>,
}
