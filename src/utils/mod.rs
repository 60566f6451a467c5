//! Utility modules.

pub mod clock;
pub mod cpu_time;
pub mod list_file;
