//! Result writer trait definition.

use crate::error::Result;
use crate::output::DistRecord;

/// Sink for dist results.
pub trait ResultWriter {
    /// Write a single result line.
    fn write_record(&mut self, record: &DistRecord) -> Result<()>;

    /// Finalize the output (flush, close, etc.).
    fn finalize(&mut self) -> Result<()>;
}
