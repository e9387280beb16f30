use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ImporterError, Result};
use crate::steam::details;
use crate::steam::models::LeaderboardFeed;

const COMMUNITY_BASE: &str = "https://steamcommunity.com/stats";
const APP_ID: u32 = 424250;
const SCORE_BOARD_ID: u32 = 771_001;
const SPEED_BOARD_ID: u32 = 771_002;

/// The feed exposes only this many entries per board.
pub const TOP_WINDOW: u32 = 5000;

/// One blocking outbound request, no retry; callers decide retry policy.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Which of the two fixed leaderboard resources to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunKind {
    Score,
    Speed,
}

impl RunKind {
    fn board_id(self) -> u32 {
        match self {
            Self::Score => SCORE_BOARD_ID,
            Self::Speed => SPEED_BOARD_ID,
        }
    }
}

impl FromStr for RunKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "score" => Ok(Self::Score),
            "speed" => Ok(Self::Speed),
            other => Err(format!("unknown run kind \"{other}\"")),
        }
    }
}

/// Best observed external result for one user: the raw result value plus
/// the run attributes decoded from the packed details field.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExternalResult {
    pub score: i64,
    pub level: i32,
    pub loadout_id: i32,
}

pub struct SteamLeaderboardClient {
    base_url: String,
    http: reqwest::Client,
}

impl SteamLeaderboardClient {
    pub fn new() -> Self {
        Self::with_base_url(COMMUNITY_BASE.to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            http: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap(),
        }
    }

    /// Fetch the board for `kind` and return the entry for `steam_id`, if
    /// it is inside the observed window.
    pub async fn fetch_result(&self, steam_id: u64, kind: RunKind) -> Result<ExternalResult> {
        let url = format!(
            "{}/{}/leaderboards/{}/?xml=1",
            self.base_url,
            APP_ID,
            kind.board_id()
        );
        tracing::debug!(%url, steam_id, "fetching external leaderboard feed");

        let body = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let feed: LeaderboardFeed = quick_xml::de::from_str(&body)?;
        result_for(&feed, steam_id)
    }
}

impl Default for SteamLeaderboardClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Linear scan of the feed window for the matching user.
fn result_for(feed: &LeaderboardFeed, steam_id: u64) -> Result<ExternalResult> {
    let entry = feed
        .entries
        .entries
        .iter()
        .find(|e| e.steam_id.parse::<u64>().ok() == Some(steam_id))
        .ok_or(ImporterError::NotFoundInTopWindow(steam_id))?;

    let decoded = details::decode(&entry.details)?;

    Ok(ExternalResult {
        score: entry.score,
        level: decoded.level,
        loadout_id: decoded.loadout_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steam::models::{EntryList, FeedEntry};

    fn feed(entries: Vec<FeedEntry>) -> LeaderboardFeed {
        LeaderboardFeed {
            entries: EntryList { entries },
        }
    }

    fn entry(steam_id: &str, score: i64, details: &str) -> FeedEntry {
        FeedEntry {
            steam_id: steam_id.to_string(),
            score,
            details: details.to_string(),
        }
    }

    #[test]
    fn test_run_kind_parses() {
        assert_eq!("score".parse::<RunKind>().unwrap(), RunKind::Score);
        assert_eq!("speed".parse::<RunKind>().unwrap(), RunKind::Speed);
        assert!("marathon".parse::<RunKind>().is_err());
    }

    #[test]
    fn test_result_for_matching_entry() {
        let feed = feed(vec![
            entry("100", 900, "0100000001000000"),
            entry("200", 187042, "0500000003000000"),
        ]);

        let result = result_for(&feed, 200).unwrap();
        assert_eq!(result.score, 187042);
        assert_eq!(result.loadout_id, 5);
        assert_eq!(result.level, 3);
    }

    #[test]
    fn test_absent_user_is_a_window_miss() {
        let feed = feed(vec![entry("100", 900, "0100000001000000")]);
        let err = result_for(&feed, 201).unwrap_err();
        assert!(matches!(err, ImporterError::NotFoundInTopWindow(201)));
    }

    #[test]
    fn test_decode_failure_is_not_a_window_miss() {
        let feed = feed(vec![entry("100", 900, "xx")]);
        let err = result_for(&feed, 100).unwrap_err();
        assert!(matches!(err, ImporterError::MalformedDetails { .. }));
    }
}
