pub mod error;
pub mod steam;

pub use error::{ImporterError, Result};
pub use steam::{ExternalResult, RunKind, SteamLeaderboardClient};
