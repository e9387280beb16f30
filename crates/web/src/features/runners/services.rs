use sqlx::PgPool;
use storage::catalog::Catalog;
use storage::dto::run::RunnerRunView;
use storage::error::Result;
use storage::models::Runner;
use storage::repository::{RunRepository, RunnerRepository};

pub async fn find_runner(pool: &PgPool, runner_id: i64) -> Result<Runner> {
    RunnerRepository::new(pool).find_by_id(runner_id).await
}

/// Every run of one runner, flagged runs included with reason attached.
pub async fn runner_runs(
    pool: &PgPool,
    catalog: &Catalog,
    runner_id: i64,
) -> Result<Vec<RunnerRunView>> {
    RunRepository::new(pool).runs_by_runner(runner_id, catalog).await
}
