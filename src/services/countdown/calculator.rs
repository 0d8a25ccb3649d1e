use chrono::{DateTime, Local};

use crate::models::time_left::{
    TimeLeft, MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND,
};

/// Calculates the time left from `now` to the target instant.
///
/// Returns `None` once the target is no longer in the future; that is the
/// elapsed terminal state, not an error. All arithmetic truncates, there is
/// no rounding up of partial seconds.
pub fn calculate_time_left(target: DateTime<Local>, now: DateTime<Local>) -> Option<TimeLeft> {
    let delta_ms = target.signed_duration_since(now).num_milliseconds();
    if delta_ms <= 0 {
        return None;
    }

    Some(TimeLeft {
        days: (delta_ms / MILLIS_PER_DAY) as u64,
        hours: ((delta_ms / MILLIS_PER_HOUR) % 24) as u32,
        minutes: ((delta_ms / MILLIS_PER_MINUTE) % 60) as u32,
        seconds: ((delta_ms / MILLIS_PER_SECOND) % 60) as u32,
    })
}
