// Test fixtures - reusable test data
// Provides a simulated clock and consistent instants across test files

use chrono::{DateTime, Duration, Local, TimeZone};
use rust_countdown::services::clock::Clock;
use std::cell::RefCell;
use std::rc::Rc;

/// Sample instants for testing
pub mod instants {
    use super::*;

    /// Returns Jun 15, 2025 at noon
    pub fn noon_jun_15_2025() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    /// Returns Jan 1, 2026 at midnight
    pub fn new_year_2026() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
    }
}

/// A hand-advanced clock. Cloned handles share the same underlying instant,
/// so a test can keep one handle and give another to the code under test.
#[derive(Clone)]
pub struct ManualClock {
    now: Rc<RefCell<DateTime<Local>>>,
}

impl ManualClock {
    pub fn starting_at(start: DateTime<Local>) -> Self {
        Self {
            now: Rc::new(RefCell::new(start)),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.borrow_mut();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Local> {
        *self.now.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_handles_share_time() {
        let clock = ManualClock::starting_at(instants::noon_jun_15_2025());
        let handle = clock.clone();

        clock.advance(Duration::seconds(5));
        assert_eq!(handle.now(), instants::noon_jun_15_2025() + Duration::seconds(5));
    }
}
