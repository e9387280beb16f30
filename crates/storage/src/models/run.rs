use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::format;
use crate::models::Goal;

/// One submitted attempt in one category, as stored. Rank is never part of
/// this shape; it is assigned from sort position at query time.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Run {
    pub run_id: i64,
    pub runner_id: i64,
    pub category_id: i32,
    /// Point score for maximizing categories, duration in milliseconds
    /// for minimizing ones.
    pub score: i64,
    /// Final level reached, 1-indexed.
    pub level: i32,
    pub link: String,
    pub platform: i32,
    pub loadout_id: i32,
    pub comment: String,
    /// Empty = visible. Non-empty = removal reason; the run is excluded
    /// from all ranking and aggregation but kept for audit.
    pub flag: String,
    pub submitted_at: DateTime<Utc>,
}

impl Run {
    pub fn is_flagged(&self) -> bool {
        !self.flag.is_empty()
    }

    pub fn world(&self) -> i32 {
        format::world_of(self.level)
    }

    pub fn floor(&self) -> i32 {
        format::floor_of(self.level)
    }

    /// "world-floor" display form of the final level, e.g. "2-1".
    pub fn display_level(&self) -> String {
        format::level(self.level)
    }

    pub fn display_score(&self, goal: Goal) -> String {
        format::score(self.score, goal)
    }

    pub fn display_date(&self) -> String {
        format::date(&self.submitted_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn run(score: i64, level: i32, flag: &str) -> Run {
        Run {
            run_id: 1,
            runner_id: 7,
            category_id: 1,
            score,
            level,
            link: String::new(),
            platform: 1,
            loadout_id: 0,
            comment: "first clear".to_string(),
            flag: flag.to_string(),
            submitted_at: Utc.with_ymd_and_hms(2023, 4, 9, 18, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_flagged_when_reason_present() {
        assert!(!run(100, 1, "").is_flagged());
        assert!(run(100, 1, "spliced video").is_flagged());
    }

    #[test]
    fn test_display_helpers_delegate_to_format() {
        let r = run(187042, 5, "");
        assert_eq!(r.display_level(), "2-1");
        assert_eq!(r.display_score(Goal::Minimize), "3:07:042");
        assert_eq!(r.display_score(Goal::Maximize), "$187042");
        assert_eq!(r.display_date(), "2023-04-09");
        assert_eq!(r.world(), 2);
        assert_eq!(r.floor(), 1);
    }
}
