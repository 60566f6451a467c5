//! Writers for dist results.

mod table;
mod types;
mod writer;

pub use table::{DistTableWriter, format_general};
pub use types::DistRecord;
pub use writer::ResultWriter;
