//! Tab-separated dist result table.

use crate::constants::STDIO_PATH;
use crate::error::{Error, Result};
use crate::output::{DistRecord, ResultWriter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Writes `query<TAB>target<TAB>mutation-distance<TAB>p-value<TAB>jaccard` lines.
pub struct DistTableWriter {
    writer: BufWriter<Box<dyn Write>>,
    path: PathBuf,
    records: usize,
}

impl DistTableWriter {
    /// Open `outfname` for writing; `-` writes to stdout.
    pub fn create(outfname: &str) -> Result<Self> {
        let path = PathBuf::from(outfname);
        let sink: Box<dyn Write> = if outfname == STDIO_PATH {
            Box::new(std::io::stdout())
        } else {
            let file = File::create(&path).map_err(|e| Error::ResultWrite {
                path: path.clone(),
                source: e,
            })?;
            Box::new(file)
        };
        Ok(Self::from_writer(sink, path))
    }

    /// Wrap an arbitrary sink; `path` only labels errors.
    pub fn from_writer(sink: Box<dyn Write>, path: PathBuf) -> Self {
        Self {
            writer: BufWriter::new(sink),
            path,
            records: 0,
        }
    }

    /// Number of records written so far.
    pub fn records(&self) -> usize {
        self.records
    }

    fn write_err(&self, source: std::io::Error) -> Error {
        Error::ResultWrite {
            path: self.path.clone(),
            source,
        }
    }
}

impl ResultWriter for DistTableWriter {
    fn write_record(&mut self, record: &DistRecord) -> Result<()> {
        let line = format!(
            "{}\t{}\t{}\t{}\t{}\n",
            record.query,
            record.target,
            format_general(record.mutation_distance),
            format_general(record.p_value),
            format_general(record.jaccard),
        );
        if let Err(e) = self.writer.write_all(line.as_bytes()) {
            return Err(self.write_err(e));
        }
        self.records += 1;
        Ok(())
    }

    fn finalize(&mut self) -> Result<()> {
        if let Err(e) = self.writer.flush() {
            return Err(self.write_err(e));
        }
        Ok(())
    }
}

/// Format like C's `%g`: six significant digits, exponent form when the
/// rounded exponent is below -4 or at least 6, no trailing zeros.
#[allow(clippy::cast_sign_loss)]
pub fn format_general(value: f64) -> String {
    const PRECISION: i32 = 6;

    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return value.to_string();
    }

    // Rounding to the target precision decides the exponent, so 999999.7
    // becomes 1e+06 rather than 1000000.
    let rounded = format!("{:.*e}", (PRECISION - 1) as usize, value);
    let (mantissa, exponent) = rounded.split_once('e').unwrap_or((rounded.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or_default();

    if exponent < -4 || exponent >= PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        );
    }

    let decimals = (PRECISION - 1 - exponent).max(0) as usize;
    trim_fraction(&format!("{value:.decimals$}")).to_string()
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
