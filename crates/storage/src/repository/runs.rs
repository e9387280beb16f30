use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, QueryBuilder};

use crate::catalog::Catalog;
use crate::dto::leaderboard::{RankedRun, RunnerInfo};
use crate::dto::run::{CreateRunRequest, RunnerRunView};
use crate::error::{Result, StorageError};
use crate::models::{Category, Run};

#[derive(FromRow)]
struct LeaderboardRow {
    run_id: i64,
    score: i64,
    level: i32,
    link: String,
    platform: i32,
    loadout_id: i32,
    comment: String,
    submitted_at: DateTime<Utc>,
    runner_id: i64,
    username: String,
    country: String,
}

pub struct RunRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RunRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Top `limit` visible runs in a category, best first, with 1-based
    /// rank assigned from sort position. `limit <= 0` returns all runs.
    ///
    /// Equal scores tie-break on run id, i.e. arrival order. The ordering
    /// rules give ties no meaning; this just keeps pagination stable.
    pub async fn runs_by_category(
        &self,
        category: &Category,
        limit: i64,
    ) -> Result<Vec<RankedRun>> {
        let mut query = QueryBuilder::new(
            r#"
            SELECT r.run_id, r.score, r.level, r.link, r.platform,
                   r.loadout_id, r.comment, r.submitted_at,
                   u.runner_id, u.username, u.country
            FROM runs r
            INNER JOIN runners u ON r.runner_id = u.runner_id
            WHERE r.category_id =
            "#,
        );
        query.push_bind(category.id);
        query.push(" AND r.flag = '' ORDER BY r.score ");
        query.push(category.goal.sql_order());
        query.push(", r.run_id ASC");
        if limit > 0 {
            query.push(" LIMIT ");
            query.push_bind(limit);
        }

        let rows: Vec<LeaderboardRow> = query.build_query_as().fetch_all(self.pool).await?;

        let entries = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| RankedRun {
                rank: i as i64 + 1,
                run_id: row.run_id,
                score: row.score,
                level: row.level,
                link: row.link,
                platform: row.platform,
                loadout_id: row.loadout_id,
                comment: row.comment,
                submitted_at: row.submitted_at,
                runner: RunnerInfo {
                    runner_id: row.runner_id,
                    username: row.username,
                    country: row.country,
                },
            })
            .collect();

        Ok(entries)
    }

    /// Rank a result of `score` would occupy in `category` without
    /// inserting it: one more than the number of visible runs at least as
    /// good under the category's goal. Ties count against the candidate:
    /// a result equal to the current record ranks directly below it, at 2.
    pub async fn hypothetical_rank(&self, score: i64, category: &Category) -> Result<i64> {
        let mut query = QueryBuilder::new("SELECT COUNT(*) FROM runs WHERE category_id = ");
        query.push_bind(category.id);
        query.push(" AND flag = '' AND score ");
        query.push(category.goal.rank_comparison());
        query.push(" ");
        query.push_bind(score);

        let better_or_equal: i64 = query.build_query_scalar().fetch_one(self.pool).await?;

        Ok(better_or_equal + 1)
    }

    /// Full history for one runner, flagged runs included with their
    /// reason attached, ordered by category. Stale category or loadout
    /// references degrade to an absent reference with a warning instead of
    /// failing the whole listing.
    pub async fn runs_by_runner(
        &self,
        runner_id: i64,
        catalog: &Catalog,
    ) -> Result<Vec<RunnerRunView>> {
        let runs: Vec<Run> = sqlx::query_as(
            r#"
            SELECT run_id, runner_id, category_id, score, level, link,
                   platform, loadout_id, comment, flag, submitted_at
            FROM runs
            WHERE runner_id = $1
            ORDER BY category_id, run_id
            "#,
        )
        .bind(runner_id)
        .fetch_all(self.pool)
        .await?;

        let views = runs
            .into_iter()
            .map(|run| {
                let category = catalog.category_by_id(run.category_id).cloned();
                if category.is_none() {
                    tracing::warn!(
                        run_id = run.run_id,
                        category_id = run.category_id,
                        "run references a category missing from the catalog"
                    );
                }
                let loadout = catalog.loadout_by_id(run.loadout_id).cloned();
                if loadout.is_none() {
                    tracing::warn!(
                        run_id = run.run_id,
                        loadout_id = run.loadout_id,
                        "run references a loadout missing from the catalog"
                    );
                }
                RunnerRunView { run, category, loadout }
            })
            .collect();

        Ok(views)
    }

    pub async fn find_by_id(&self, run_id: i64) -> Result<Run> {
        let run = sqlx::query_as(
            r#"
            SELECT run_id, runner_id, category_id, score, level, link,
                   platform, loadout_id, comment, flag, submitted_at
            FROM runs
            WHERE run_id = $1
            "#,
        )
        .bind(run_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(run)
    }

    /// Insert a validated submission. Storage assigns the id and the
    /// timestamp; the flag starts empty.
    pub async fn create(&self, request: &CreateRunRequest) -> Result<i64> {
        let run_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO runs (runner_id, category_id, score, level, link,
                              platform, loadout_id, comment)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING run_id
            "#,
        )
        .bind(request.runner_id)
        .bind(request.category_id)
        .bind(request.score)
        .bind(request.level)
        .bind(&request.link)
        .bind(request.platform)
        .bind(request.loadout_id)
        .bind(&request.comment)
        .fetch_one(self.pool)
        .await?;

        Ok(run_id)
    }

    /// Persist a removal reason. The run stays in storage for audit but
    /// disappears from every ranking query. Racing moderators: last write
    /// wins, no optimistic-concurrency check.
    pub async fn set_flag(&self, run_id: i64, reason: &str) -> Result<()> {
        let result = sqlx::query("UPDATE runs SET flag = $1 WHERE run_id = $2")
            .bind(reason)
            .bind(run_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }

    /// Permanent removal. No cascades: ranks are computed at read time,
    /// so nothing needs recomputing.
    pub async fn delete(&self, run_id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM runs WHERE run_id = $1")
            .bind(run_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }
}
