//! Application-wide constants.
//!
//! Option names, sentinels and default values live here so that the parsers,
//! the usage text and the persisted header all agree on them.

/// Application name used in usage text and user-facing messages.
pub const APP_NAME: &str = "bindash";

/// Sentinel path meaning standard input (list files) or standard output (dist results).
pub const STDIO_PATH: &str = "-";

/// Prefix shared by every recognised option token.
pub const OPTION_PREFIX: &str = "--";

/// Any token starting with this prefix requests usage text.
pub const HELP_PREFIX: &str = "--help";

/// Option key whose value is ignored by every parser.
pub const COMMENT_KEY: &str = "--COMMENT";

/// Separator between the filename and the entity groups of a list-file line.
pub const LIST_FIELD_SEPARATOR: char = '\t';

/// Prefix of the time-stamped default sketch output name.
pub const SKETCH_OUTFNAME_PREFIX: &str = "sketch-at-time-";

/// Largest `--bbits` value; minhash values are 64 bits wide.
pub const MAX_BBITS: u32 = 64;

/// Revision recorded in the provenance comments of a persisted header.
pub fn revision() -> &'static str {
    option_env!("BINDASH_GIT_COMMIT").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Option keys, shared by the parsers, the header writer and the usage text.
pub mod keys {
    /// `--bbits`
    pub const BBITS: &str = "--bbits";
    /// `--iscasepreserved`
    pub const IS_CASE_PRESERVED: &str = "--iscasepreserved";
    /// `--isstrandpreserved`
    pub const IS_STRAND_PRESERVED: &str = "--isstrandpreserved";
    /// `--kmerlen`
    pub const KMERLEN: &str = "--kmerlen";
    /// `--listfname`
    pub const LISTFNAME: &str = "--listfname";
    /// `--minhashtype`
    pub const MINHASHTYPE: &str = "--minhashtype";
    /// `--nthreads`
    pub const NTHREADS: &str = "--nthreads";
    /// `--outfname`
    pub const OUTFNAME: &str = "--outfname";
    /// `--randseed`
    pub const RANDSEED: &str = "--randseed";
    /// `--sketchsize64`
    pub const SKETCHSIZE64: &str = "--sketchsize64";
    /// `--ithres`
    pub const ITHRES: &str = "--ithres";
    /// `--mthres`
    pub const MTHRES: &str = "--mthres";
    /// `--nneighbors`
    pub const NNEIGHBORS: &str = "--nneighbors";
    /// `--pthres`
    pub const PTHRES: &str = "--pthres";
}

/// Default values for the sketch command.
pub mod sketch_defaults {
    /// Bits kept per minhash value.
    pub const BBITS: u32 = 14;
    /// K-mer length.
    pub const KMERLEN: usize = 21;
    /// Minhash strategy (bucketed, one hash function).
    pub const MINHASHTYPE: i32 = 2;
    /// Worker threads handed to the sketch engine.
    pub const NTHREADS: usize = 1;
    /// Hash seed.
    pub const RANDSEED: u64 = 41;
    /// Sketch size in units of 64 minhash values.
    pub const SKETCHSIZE64: usize = 32;
}

/// Default values for the dist command.
pub mod dist_defaults {
    /// Minimum intersection size below which Jaccard is forced to zero.
    pub const ITHRES: usize = 2;
    /// Largest reported mutation distance.
    pub const MTHRES: f64 = 2.5;
    /// Best hits reported per query (0 = all).
    pub const NNEIGHBORS: usize = 0;
    /// Worker threads handed to the distance engine.
    pub const NTHREADS: usize = 1;
    /// Largest reported p-value.
    pub const PTHRES: f64 = 1.0 + 1e-4;
}

/// Reserved process exit codes, one per error class.
pub mod exit_codes {
    /// Missing or unknown command.
    pub const TOP_LEVEL_USAGE: i32 = -2;
    /// `--help` was requested for a command.
    pub const USAGE_REQUESTED: i32 = 1;
    /// Two sketches were built with incompatible settings.
    pub const CONFIG_MISMATCH: i32 = 2;
    /// Unknown `--name` option.
    pub const UNRECOGNIZED_OPTION: i32 = 3;
    /// The list file could not be opened.
    pub const LIST_FILE_UNREADABLE: i32 = 4;
    /// An option value is missing or does not parse.
    pub const INVALID_VALUE: i32 = 5;
    /// dist received other than one or two sketches.
    pub const WRONG_ARGUMENT_COUNT: i32 = 6;
    /// A persisted sketch header contains an invalid line.
    pub const CORRUPT_CONFIG: i32 = 7;
    /// A named path could not be opened, read or written.
    pub const IO_FAILURE: i32 = -1;
    /// A list-file line has a bad entity group.
    pub const MALFORMED_LIST_LINE: i32 = -4;
    /// An explicit genome name was used twice.
    pub const DUPLICATE_ENTITY: i32 = -8;
    /// A bare filename collides with an existing genome name.
    pub const DUPLICATE_FILE_ENTITY: i32 = -16;
}
