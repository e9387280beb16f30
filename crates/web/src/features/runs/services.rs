use sqlx::PgPool;
use storage::catalog::Catalog;
use storage::dto::run::CreateRunRequest;
use storage::error::Result;
use storage::models::Run;
use storage::notify::Notifier;
use storage::repository::RunRepository;
use storage::services::moderation::{FlagOutcome, ModerationService};

pub async fn find_run(pool: &PgPool, run_id: i64) -> Result<Run> {
    RunRepository::new(pool).find_by_id(run_id).await
}

pub async fn create_run(pool: &PgPool, request: &CreateRunRequest) -> Result<i64> {
    RunRepository::new(pool).create(request).await
}

pub async fn flag_run(
    pool: &PgPool,
    catalog: &Catalog,
    run_id: i64,
    reason: &str,
    notifier: &dyn Notifier,
) -> Result<FlagOutcome> {
    ModerationService::new(pool, catalog)
        .flag(run_id, reason, notifier)
        .await
}

pub async fn delete_run(pool: &PgPool, catalog: &Catalog, run_id: i64) -> Result<()> {
    ModerationService::new(pool, catalog).delete(run_id).await
}
