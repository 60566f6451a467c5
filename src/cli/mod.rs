//! CLI argument parsing and usage text.

mod args;
pub mod options;
pub mod usage;

pub use args::{Cli, Command};
