//! Display formatting for run results and positions.
//!
//! Exporters and page renderers call these helpers rather than re-deriving
//! the rules; leaderboard output must be byte-identical everywhere
//! (`"$1500"`, `"3:07:042"`, `"2-1"`).

use chrono::{DateTime, Utc};

use crate::models::Goal;

/// Levels pack a (world, floor) pair, four floors per world, both
/// 1-indexed. The encoding is fixed by the game and never parameterized.
const FLOORS_PER_WORLD: i32 = 4;

pub fn world_of(level: i32) -> i32 {
    (level - 1) / FLOORS_PER_WORLD + 1
}

pub fn floor_of(level: i32) -> i32 {
    (level - 1) % FLOORS_PER_WORLD + 1
}

/// "world-floor" form of a level number: level 5 formats as "2-1".
pub fn level(level: i32) -> String {
    format!("{}-{}", world_of(level), floor_of(level))
}

/// Human-readable result: a dollar score for maximizing categories, a
/// `minutes:seconds:milliseconds` time for minimizing ones. Minutes are
/// unbounded; there is no hour component.
pub fn score(value: i64, goal: Goal) -> String {
    match goal {
        Goal::Maximize => format!("${value}"),
        Goal::Minimize => {
            let minutes = value / 60_000;
            let seconds = (value - minutes * 60_000) / 1_000;
            let millis = value - minutes * 60_000 - seconds * 1_000;
            format!("{minutes}:{seconds:02}:{millis:03}")
        }
    }
}

pub fn date(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_level_to_world_and_floor() {
        assert_eq!((world_of(1), floor_of(1)), (1, 1));
        assert_eq!((world_of(4), floor_of(4)), (1, 4));
        assert_eq!((world_of(5), floor_of(5)), (2, 1));
        assert_eq!((world_of(20), floor_of(20)), (5, 4));
    }

    #[test]
    fn test_level_display() {
        assert_eq!(level(1), "1-1");
        assert_eq!(level(5), "2-1");
        assert_eq!(level(16), "4-4");
    }

    #[test]
    fn test_score_display_maximize() {
        assert_eq!(score(1500, Goal::Maximize), "$1500");
        // no thousands separators
        assert_eq!(score(1_234_567, Goal::Maximize), "$1234567");
    }

    #[test]
    fn test_score_display_minimize() {
        // 187042ms = 3min 7.042s
        assert_eq!(score(187_042, Goal::Minimize), "3:07:042");
        assert_eq!(score(5_007, Goal::Minimize), "0:05:007");
        assert_eq!(score(60_000, Goal::Minimize), "1:00:000");
        // minutes are unbounded, never rolled into hours
        assert_eq!(score(3_600_000, Goal::Minimize), "60:00:000");
    }

    #[test]
    fn test_date_display() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 3, 23, 59, 59).unwrap();
        assert_eq!(date(&ts), "2024-01-03");
    }
}
