//! Small shared helpers

pub mod logger;
pub mod time;
