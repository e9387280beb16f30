pub mod leaderboards;
pub mod runners;
pub mod runs;
pub mod steam;
