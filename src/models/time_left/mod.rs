use serde::{Deserialize, Serialize};

/// Decomposition of a positive duration into days, hours, minutes and
/// seconds. Produced fresh on every evaluation and never mutated in place.
///
/// Invariants: `hours < 24`, `minutes < 60`, `seconds < 60`; `days` is
/// unbounded. The elapsed state is represented by the absence of a value
/// (`Option::None`), never by a `TimeLeft` of zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeLeft {
    pub days: u64,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const MILLIS_PER_MINUTE: i64 = 60_000;
pub const MILLIS_PER_HOUR: i64 = 3_600_000;
pub const MILLIS_PER_DAY: i64 = 86_400_000;

impl TimeLeft {
    /// Reconstructs the total milliseconds represented by the four fields.
    /// Because decomposition truncates sub-second remainders, this is at most
    /// the original delta and greater than the delta minus one second.
    pub fn total_milliseconds(&self) -> i64 {
        self.days as i64 * MILLIS_PER_DAY
            + self.hours as i64 * MILLIS_PER_HOUR
            + self.minutes as i64 * MILLIS_PER_MINUTE
            + self.seconds as i64 * MILLIS_PER_SECOND
    }

    /// True when every field is zero (target less than one second away).
    pub fn is_zero(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}
