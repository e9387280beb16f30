use sqlx::PgPool;

use crate::catalog::Catalog;
use crate::dto::leaderboard::{RecordsByClass, WorldRecord};
use crate::error::{Result, StorageError};
use crate::models::CategoryClass;
use crate::repository::RunRepository;

/// Current world record of every category, in catalog order.
///
/// All-or-nothing: a category with zero visible runs fails the whole
/// aggregation instead of silently presenting an incomplete record table
/// as complete. Callers wanting partial results query per category.
pub async fn all_world_records(pool: &PgPool, catalog: &Catalog) -> Result<Vec<WorldRecord>> {
    let repo = RunRepository::new(pool);
    let mut records = Vec::with_capacity(catalog.all().len());

    for category in catalog.all() {
        let mut top = repo.runs_by_category(category, 1).await?;
        let best = top.pop().ok_or_else(|| StorageError::IncompleteRecords {
            category: category.name.clone(),
        })?;
        records.push(WorldRecord {
            category: category.clone(),
            run: best,
        });
    }

    Ok(records)
}

/// Partition aggregated records into the two front-page groups, keeping
/// catalog order within each.
pub fn group_by_class(records: Vec<WorldRecord>) -> RecordsByClass {
    let (main, challenge) = records
        .into_iter()
        .partition(|r| r.category.class == CategoryClass::Main);

    RecordsByClass { main, challenge }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::leaderboard::{RankedRun, RunnerInfo};
    use crate::models::{Category, Goal};
    use chrono::Utc;

    fn record(id: i32, class: CategoryClass) -> WorldRecord {
        WorldRecord {
            category: Category {
                id,
                name: format!("cat {id}"),
                goal: Goal::Maximize,
                abbr: format!("c{id}"),
                definition: String::new(),
                class,
            },
            run: RankedRun {
                rank: 1,
                run_id: id as i64,
                score: 100,
                level: 1,
                link: String::new(),
                platform: 1,
                loadout_id: 0,
                comment: String::new(),
                submitted_at: Utc::now(),
                runner: RunnerInfo {
                    runner_id: 1,
                    username: "delver".to_string(),
                    country: "SE".to_string(),
                },
            },
        }
    }

    #[test]
    fn test_group_by_class_partitions_in_order() {
        let records = vec![
            record(1, CategoryClass::Main),
            record(2, CategoryClass::Main),
            record(3, CategoryClass::Challenge),
            record(4, CategoryClass::Challenge),
        ];

        let grouped = group_by_class(records);

        let main_ids: Vec<i32> = grouped.main.iter().map(|r| r.category.id).collect();
        let challenge_ids: Vec<i32> = grouped.challenge.iter().map(|r| r.category.id).collect();
        assert_eq!(main_ids, vec![1, 2]);
        assert_eq!(challenge_ids, vec![3, 4]);
    }

    #[test]
    fn test_group_by_class_handles_empty_groups() {
        let grouped = group_by_class(vec![record(1, CategoryClass::Challenge)]);
        assert!(grouped.main.is_empty());
        assert_eq!(grouped.challenge.len(), 1);
    }
}
