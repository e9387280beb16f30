use thiserror::Error;

use crate::steam::TOP_WINDOW;

pub type Result<T> = std::result::Result<T, ImporterError>;

#[derive(Error, Debug)]
pub enum ImporterError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse leaderboard feed: {0}")]
    Feed(#[from] quick_xml::DeError),

    #[error("Malformed details field {details:?}: {reason}")]
    MalformedDetails { details: String, reason: String },

    /// The feed only exposes a fixed top window; absence from it does not
    /// mean the user has no result, only that it is not observable.
    #[error("Steam ID {0} not found in top {TOP_WINDOW} entries")]
    NotFoundInTopWindow(u64),
}
