//! Error types for bindash.

use crate::config::Mismatch;
use crate::constants::exit_codes;
use std::path::PathBuf;

/// Result type alias for bindash operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for bindash.
///
/// Every failure ends the current command; `main` turns it into the
/// reserved exit code returned by [`Error::exit_code`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The command is missing or unknown.
    #[error("{reason}")]
    TopLevelUsage {
        /// What was wrong with the command line.
        reason: String,
    },

    /// `--help` was given to a command. Not a failure, but the command stops.
    #[error("usage of '{command}' requested")]
    UsageRequested {
        /// Command whose usage was requested.
        command: &'static str,
    },

    /// A `--name` token that the command does not know.
    #[error("unrecognized option: {token}")]
    UnrecognizedOption {
        /// Command being parsed.
        command: &'static str,
        /// The offending token.
        token: String,
    },

    /// A recognised option whose value is missing or does not parse.
    #[error("option without valid value: {token} ({reason})")]
    InvalidValue {
        /// Command being parsed.
        command: &'static str,
        /// The offending token.
        token: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// dist needs one or two sketches.
    #[error("either one or two non-optional arguments are required, got {count}")]
    WrongArgumentCount {
        /// Number of positional arguments supplied.
        count: usize,
    },

    /// The list file could not be opened.
    #[error("the listfname '{path}' cannot be opened")]
    ListFileUnreadable {
        /// Path to the list file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Reading lines from the list file or stdin failed midway.
    #[error("failed to read input filenames from '{path}'")]
    ListFileRead {
        /// Path to the list file (`-` for stdin).
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A list-file line with a bad entity group.
    #[error("malformed line {line_number} '{line}': {reason}")]
    MalformedListLine {
        /// One-based line number within the resolved input list.
        line_number: usize,
        /// The offending line.
        line: String,
        /// What is wrong with it.
        reason: String,
    },

    /// An explicitly named genome appears twice.
    #[error("the genome {name} is duplicated")]
    DuplicateEntityName {
        /// The duplicated genome name.
        name: String,
    },

    /// A bare filename collides with a genome name already in use.
    #[error("the genome and the file {name} is duplicated")]
    DuplicateFileEntityName {
        /// The duplicated file/genome name.
        name: String,
    },

    /// Failed to open a persisted sketch header.
    #[error("cannot open the file '{path}' for reading")]
    ConfigRead {
        /// Path to the sketch header.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A persisted sketch header contains a line that does not parse.
    #[error("the line '{line}' (line {line_number}) in the file '{path}' is invalid: {reason}")]
    CorruptConfig {
        /// Path to the sketch header.
        path: PathBuf,
        /// One-based line number.
        line_number: usize,
        /// The offending line.
        line: String,
        /// Why the line was rejected.
        reason: String,
    },

    /// Failed to write a sketch header.
    #[error("cannot open the file '{path}' for writing")]
    ConfigWrite {
        /// Path to the sketch header.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Two sketches were produced under incompatible settings.
    #[error("sketches '{}' and '{}' are incompatible:\n{}", .left_path.display(), .right_path.display(), render_mismatches(.mismatches))]
    ConfigMismatch {
        /// Sketch the left-hand configuration came from.
        left_path: PathBuf,
        /// Sketch the right-hand configuration came from.
        right_path: PathBuf,
        /// Every mismatching field.
        mismatches: Vec<Mismatch>,
    },

    /// Failed to write dist results.
    #[error("cannot write results to '{path}'")]
    ResultWrite {
        /// Output path (`-` for stdout).
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The external sketch or distance engine failed.
    #[error("engine failed: {reason}")]
    Engine {
        /// Description of the failure.
        reason: String,
    },
}

fn render_mismatches(mismatches: &[Mismatch]) -> String {
    mismatches
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

impl Error {
    /// Reserved process exit code for this error class.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::TopLevelUsage { .. } => exit_codes::TOP_LEVEL_USAGE,
            Self::UsageRequested { .. } => exit_codes::USAGE_REQUESTED,
            Self::ConfigMismatch { .. } => exit_codes::CONFIG_MISMATCH,
            Self::UnrecognizedOption { .. } => exit_codes::UNRECOGNIZED_OPTION,
            Self::ListFileUnreadable { .. } => exit_codes::LIST_FILE_UNREADABLE,
            Self::InvalidValue { .. } => exit_codes::INVALID_VALUE,
            Self::WrongArgumentCount { .. } => exit_codes::WRONG_ARGUMENT_COUNT,
            Self::CorruptConfig { .. } => exit_codes::CORRUPT_CONFIG,
            Self::MalformedListLine { .. } => exit_codes::MALFORMED_LIST_LINE,
            Self::DuplicateEntityName { .. } => exit_codes::DUPLICATE_ENTITY,
            Self::DuplicateFileEntityName { .. } => exit_codes::DUPLICATE_FILE_ENTITY,
            Self::Io(_)
            | Self::ListFileRead { .. }
            | Self::ConfigRead { .. }
            | Self::ConfigWrite { .. }
            | Self::ResultWrite { .. }
            | Self::Engine { .. } => exit_codes::IO_FAILURE,
        }
    }

    /// Whether this is a `--help` request rather than a real failure.
    pub fn is_usage_request(&self) -> bool {
        matches!(self, Self::UsageRequested { .. })
    }

    /// Whether usage text accompanies this error.
    pub fn shows_usage(&self) -> bool {
        matches!(
            self,
            Self::TopLevelUsage { .. }
                | Self::UsageRequested { .. }
                | Self::UnrecognizedOption { .. }
                | Self::InvalidValue { .. }
                | Self::WrongArgumentCount { .. }
        )
    }
}
