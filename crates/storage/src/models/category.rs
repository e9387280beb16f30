use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Direction a category ranks in: treasure categories maximize a point
/// score, speedrun categories minimize a duration in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Maximize,
    Minimize,
}

impl Goal {
    /// SQL sort direction that puts the best result first.
    pub fn sql_order(&self) -> &'static str {
        match self {
            Self::Maximize => "DESC",
            Self::Minimize => "ASC",
        }
    }

    /// SQL comparison selecting results at least as good as a candidate.
    /// Ties count against the candidate: an equal result ranks directly
    /// below the existing tied run.
    pub fn rank_comparison(&self) -> &'static str {
        match self {
            Self::Maximize => ">=",
            Self::Minimize => "<=",
        }
    }
}

/// Which of the two fixed front-page groups a category belongs to.
/// Membership is positional in the catalog file, not a stored field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CategoryClass {
    Main,
    Challenge,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub goal: Goal,
    /// Unique short handle used in URLs, e.g. "any".
    pub abbr: String,
    pub definition: String,
    pub class: CategoryClass,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maximize_sorts_descending() {
        assert_eq!(Goal::Maximize.sql_order(), "DESC");
        assert_eq!(Goal::Minimize.sql_order(), "ASC");
    }

    #[test]
    fn test_rank_comparison_counts_ties() {
        assert_eq!(Goal::Maximize.rank_comparison(), ">=");
        assert_eq!(Goal::Minimize.rank_comparison(), "<=");
    }
}
