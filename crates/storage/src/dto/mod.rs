pub mod leaderboard;
pub mod run;
