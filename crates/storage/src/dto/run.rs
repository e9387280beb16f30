use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Category, Loadout, Run};

/// Submission payload for a new run. Score, level, platform, loadout and
/// comment are mandatory; id, rank, timestamp and flag are never supplied
/// by the caller.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRunRequest {
    pub runner_id: i64,
    pub category_id: i32,
    #[validate(range(min = 1, message = "score must be a positive result value"))]
    pub score: i64,
    #[validate(range(min = 1, message = "level is 1-indexed"))]
    pub level: i32,
    #[serde(default)]
    pub link: String,
    #[validate(range(min = 1, message = "platform tag is mandatory"))]
    pub platform: i32,
    pub loadout_id: i32,
    #[validate(length(min = 1, message = "comment is mandatory"))]
    pub comment: String,
}

/// One run in a runner's full history, flagged runs included. Category and
/// loadout are resolved against the catalogs at read time; a reference that
/// no longer resolves is reported as absent rather than invented.
#[derive(Debug, Serialize, ToSchema)]
pub struct RunnerRunView {
    #[serde(flatten)]
    pub run: Run,
    pub category: Option<Category>,
    pub loadout: Option<Loadout>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateRunRequest {
        CreateRunRequest {
            runner_id: 1,
            category_id: 2,
            score: 187_042,
            level: 5,
            link: "https://example.com/vod".to_string(),
            platform: 1,
            loadout_id: 0,
            comment: "pb by 4 seconds".to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_mandatory_fields_enforced() {
        let mut r = request();
        r.score = 0;
        assert!(r.validate().is_err());

        let mut r = request();
        r.level = 0;
        assert!(r.validate().is_err());

        let mut r = request();
        r.platform = 0;
        assert!(r.validate().is_err());

        let mut r = request();
        r.comment = String::new();
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_link_is_optional() {
        let mut r = request();
        r.link = String::new();
        assert!(r.validate().is_ok());
    }
}
