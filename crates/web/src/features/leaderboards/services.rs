use sqlx::PgPool;
use storage::catalog::Catalog;
use storage::dto::leaderboard::{RankedRun, RecordsByClass};
use storage::error::Result;
use storage::models::Category;
use storage::repository::RunRepository;
use storage::services::records;

/// Ranked leaderboard of one category, truncated to `limit` when positive.
pub async fn leaderboard(
    pool: &PgPool,
    category: &Category,
    limit: i64,
) -> Result<Vec<RankedRun>> {
    RunRepository::new(pool).runs_by_category(category, limit).await
}

/// Rank a not-yet-submitted result would occupy in a category.
pub async fn hypothetical_rank(pool: &PgPool, score: i64, category: &Category) -> Result<i64> {
    RunRepository::new(pool).hypothetical_rank(score, category).await
}

/// World records for every category, grouped main/challenge.
pub async fn world_records(pool: &PgPool, catalog: &Catalog) -> Result<RecordsByClass> {
    let all = records::all_world_records(pool, catalog).await?;
    Ok(records::group_by_class(all))
}
