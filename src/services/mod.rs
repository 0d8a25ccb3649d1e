// Service module exports

pub mod clock;
pub mod countdown;
pub mod settings;
