//! Adapter for the Steam community leaderboard feed.
//!
//! The feed is the public XML rendering of one leaderboard resource per run
//! kind, bounded to a top window of entries. Each entry carries a packed
//! `details` string whose fixed hex offsets encode the loadout and final
//! level of the run; [`details`] decodes it into the same run-attribute
//! shape used internally.

pub mod client;
pub mod details;
pub mod models;

pub use client::{ExternalResult, RunKind, SteamLeaderboardClient, TOP_WINDOW};
