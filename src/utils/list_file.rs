//! Reading input descriptor lines from a list file or stdin.

use crate::constants::HELP_PREFIX;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Outcome of reading a list of input descriptor lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListLines {
    /// All lines, in order, exactly as given.
    Lines(Vec<String>),
    /// A line equal to `--help` was met; the caller should show usage.
    HelpRequested,
}

/// Read descriptor lines from `reader`.
///
/// `origin` only labels errors (`-` for stdin). Lines are kept verbatim,
/// tabs included; only the line terminator is removed.
pub fn read_list_lines<R: BufRead>(reader: R, origin: &Path) -> Result<ListLines> {
    let mut lines = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|e| Error::ListFileRead {
            path: origin.to_path_buf(),
            source: e,
        })?;

        if line == HELP_PREFIX {
            return Ok(ListLines::HelpRequested);
        }
        lines.push(line);
    }

    Ok(ListLines::Lines(lines))
}

/// Read descriptor lines from the list file at `path`.
pub fn read_list_file(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| Error::ListFileUnreadable {
        path: path.to_path_buf(),
        source: e,
    })?;

    // Only stdin honours `--help` lines; in a real file it is just a name.
    let reader = BufReader::new(file);
    reader
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| Error::ListFileRead {
            path: path.to_path_buf(),
            source: e,
        })
}
