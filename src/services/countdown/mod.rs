mod calculator;
mod ticker;

pub use calculator::calculate_time_left;
pub use ticker::{CountdownTicker, TickUpdate, TICK_INTERVAL_MS};
