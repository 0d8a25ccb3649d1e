// Module exports for models

pub mod style;
pub mod time_left;
