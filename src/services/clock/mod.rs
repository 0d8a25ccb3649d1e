use chrono::{DateTime, Local};

/// Injectable current-time source. The refresh loop depends on this instead
/// of reading the wall clock directly so its behavior can be driven by a
/// simulated clock in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Production clock backed by the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
