use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::Runner;

const RUNNER_COLUMNS: &str =
    "runner_id, username, email, country, steam_id, email_on_flag, created_at";

pub struct RunnerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RunnerRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, runner_id: i64) -> Result<Runner> {
        let runner = sqlx::query_as(&format!(
            "SELECT {RUNNER_COLUMNS} FROM runners WHERE runner_id = $1"
        ))
        .bind(runner_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(runner)
    }
}
