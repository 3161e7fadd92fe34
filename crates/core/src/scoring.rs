//! Scoring module - points, leveling and gravity timing
//!
//! All three are pure functions of the game's counters, so they stay
//! trivially testable and the state machine just calls in.

use std::time::Duration;

use blockfall_types::{
    BASE_DROP_SECS, DROP_TIME_OFFSET_SECS, FAST_DROP_SECS, LINES_PER_LEVEL, LINE_SCORES,
};

/// Points for clearing `rows` simultaneous rows at the given level.
/// 0 or more than 4 rows award nothing.
pub fn line_clear_score(rows: usize, level: u32) -> u32 {
    if rows == 0 || rows >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[rows].saturating_mul(level + 1)
}

/// Level derived from the cumulative cleared-line count. Recomputing (rather
/// than incrementing) keeps it correct when several lines clear at once.
pub fn level_for_lines(cleared_lines: u32) -> u32 {
    cleared_lines / LINES_PER_LEVEL
}

/// Delay between automatic gravity ticks.
///
/// Shrinks logarithmically with the level and never goes below the
/// fast-drop interval, which also serves as the fixed delay while the
/// fast-drop input is held.
pub fn drop_interval(level: u32, fast_drop: bool) -> Duration {
    if fast_drop {
        return Duration::from_secs_f64(FAST_DROP_SECS);
    }
    let secs = BASE_DROP_SECS - f64::from(level + 1).ln() * DROP_TIME_OFFSET_SECS;
    Duration::from_secs_f64(secs.max(FAST_DROP_SECS))
}
