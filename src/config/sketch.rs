//! Configuration of the `sketch` command.

use crate::cli::options::{
    OptionError, Token, classify, parse_bool, parse_number, parse_positive, parse_string,
};
use crate::config::MinhashType;
use crate::constants::{
    MAX_BBITS, SKETCH_OUTFNAME_PREFIX, STDIO_PATH, keys, sketch_defaults,
};
use crate::error::{Error, Result};
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::list_file::{ListLines, read_list_file, read_list_lines};
use std::io::BufRead;
use std::path::Path;
use tracing::info;

/// Name of the sketch command.
pub const SKETCH_COMMAND: &str = "sketch";

/// Settings of one `sketch` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SketchConfig {
    /// Input descriptor lines: a path, optionally followed by
    /// tab-separated genome-name / sequence-count pairs.
    pub infnames: Vec<String>,
    /// Bits kept per minhash value.
    pub bbits: u32,
    /// Treat lowercase and uppercase letters as different.
    pub iscasepreserved: bool,
    /// Ignore reverse complements.
    pub isstrandpreserved: bool,
    /// File listing the inputs when none are given positionally (`-` = stdin).
    pub listfname: String,
    /// K-mer length.
    pub kmerlen: usize,
    /// Minhash strategy.
    pub minhashtype: MinhashType,
    /// Worker threads for the sketch engine.
    pub nthreads: usize,
    /// Output sketch path.
    pub outfname: String,
    /// Hash seed.
    pub randseed: u64,
    /// Sketch size in units of 64 minhash values.
    pub sketchsize64: usize,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self::new(&SystemClock)
    }
}

impl SketchConfig {
    /// Default configuration; the output name embeds the clock's current time.
    pub fn new(clock: &dyn Clock) -> Self {
        Self {
            infnames: Vec::new(),
            bbits: sketch_defaults::BBITS,
            iscasepreserved: false,
            isstrandpreserved: false,
            listfname: STDIO_PATH.to_string(),
            kmerlen: sketch_defaults::KMERLEN,
            minhashtype: MinhashType::from_code(sketch_defaults::MINHASHTYPE).unwrap_or_default(),
            nthreads: sketch_defaults::NTHREADS,
            outfname: format!("{SKETCH_OUTFNAME_PREFIX}{}", clock.now().timestamp()),
            randseed: sketch_defaults::RANDSEED,
            sketchsize64: sketch_defaults::SKETCHSIZE64,
        }
    }

    /// Apply one token to this configuration.
    ///
    /// Positional tokens are appended to `infnames`; `--COMMENT` is ignored.
    pub fn apply(&mut self, arg: &str) -> std::result::Result<(), OptionError> {
        match classify(arg) {
            Token::Help => Err(OptionError::HelpRequested),
            Token::Comment => Ok(()),
            Token::Positional(name) => {
                self.infnames.push(name.to_string());
                Ok(())
            }
            Token::Option { key, value } => self.set(arg, key, value),
        }
    }

    fn set(
        &mut self,
        arg: &str,
        key: &str,
        value: Option<&str>,
    ) -> std::result::Result<(), OptionError> {
        let invalid = OptionError::invalid(arg);
        match key {
            keys::BBITS => {
                self.bbits = parse_positive(value)
                    .and_then(|bits| {
                        if bits > MAX_BBITS {
                            Err(format!("must be at most {MAX_BBITS}, got {bits}"))
                        } else {
                            Ok(bits)
                        }
                    })
                    .map_err(invalid)?;
            }
            keys::IS_CASE_PRESERVED => self.iscasepreserved = parse_bool(value).map_err(invalid)?,
            keys::IS_STRAND_PRESERVED => {
                self.isstrandpreserved = parse_bool(value).map_err(invalid)?;
            }
            keys::KMERLEN => self.kmerlen = parse_positive(value).map_err(invalid)?,
            keys::LISTFNAME => self.listfname = parse_string(value).map_err(invalid)?,
            keys::MINHASHTYPE => self.minhashtype = parse_number(value).map_err(invalid)?,
            keys::NTHREADS => self.nthreads = parse_positive(value).map_err(invalid)?,
            keys::OUTFNAME => self.outfname = parse_string(value).map_err(invalid)?,
            keys::RANDSEED => self.randseed = parse_number(value).map_err(invalid)?,
            keys::SKETCHSIZE64 => self.sketchsize64 = parse_positive(value).map_err(invalid)?,
            _ => return Err(OptionError::unrecognized(arg)),
        }
        Ok(())
    }

    /// Parse command-line tokens without resolving the input list.
    pub fn parse_args<I, S>(args: I, clock: &dyn Clock) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::new(clock);
        for arg in args {
            config
                .apply(arg.as_ref())
                .map_err(|e| e.into_error(SKETCH_COMMAND))?;
        }
        Ok(config)
    }

    /// Fill `infnames` from the list file, or from `stdin` when `listfname` is `-`.
    ///
    /// Does nothing if inputs were given positionally.
    pub fn resolve_inputs<R: BufRead>(&mut self, stdin: R) -> Result<()> {
        if !self.infnames.is_empty() {
            return Ok(());
        }

        if self.listfname == STDIO_PATH {
            info!("Reading input filenames from stdin");
            info!("Enter \"--help\" (without quotes) to show usage");
            match read_list_lines(stdin, Path::new(STDIO_PATH))? {
                ListLines::Lines(lines) => self.infnames = lines,
                ListLines::HelpRequested => {
                    return Err(Error::UsageRequested {
                        command: SKETCH_COMMAND,
                    });
                }
            }
        } else {
            info!("Reading input filenames from {}", self.listfname);
            self.infnames = read_list_file(Path::new(&self.listfname))?;
        }

        Ok(())
    }

    /// Parse tokens and resolve the input list.
    pub fn parse<I, S, R>(args: I, clock: &dyn Clock, stdin: R) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        R: BufRead,
    {
        let mut config = Self::parse_args(args, clock)?;
        config.resolve_inputs(stdin)?;
        Ok(config)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::utils::clock::FixedClock;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    fn clock() -> FixedClock {
        FixedClock::from_unix_seconds(1_600_000_000)
    }

    #[test]
    fn test_defaults() {
        let config = SketchConfig::new(&clock());
        assert_eq!(config.bbits, 14);
        assert!(!config.iscasepreserved);
        assert!(!config.isstrandpreserved);
        assert_eq!(config.listfname, "-");
        assert_eq!(config.kmerlen, 21);
        assert_eq!(config.minhashtype, MinhashType::Bucketed);
        assert_eq!(config.nthreads, 1);
        assert_eq!(config.outfname, "sketch-at-time-1600000000");
        assert_eq!(config.randseed, 41);
        assert_eq!(config.sketchsize64, 32);
        assert!(config.infnames.is_empty());
    }

    #[test]
    fn test_parse_options_and_positionals() {
        let config = SketchConfig::parse_args(
            ["--bbits=10", "--kmerlen=15", "file1.fa", "file2.fa"],
            &clock(),
        )
        .unwrap();

        let mut expected = SketchConfig::new(&clock());
        expected.bbits = 10;
        expected.kmerlen = 15;
        expected.infnames = vec!["file1.fa".to_string(), "file2.fa".to_string()];
        assert_eq!(config, expected);
    }

    #[test]
    fn test_parse_every_option() {
        let config = SketchConfig::parse_args(
            [
                "--bbits=64",
                "--iscasepreserved=true",
                "--isstrandpreserved=true",
                "--kmerlen=31",
                "--listfname=inputs.txt",
                "--minhashtype=-1",
                "--nthreads=8",
                "--outfname=out.sketch",
                "--randseed=18446744073709551615",
                "--sketchsize64=1",
            ],
            &clock(),
        )
        .unwrap();

        assert_eq!(config.bbits, 64);
        assert!(config.iscasepreserved);
        assert!(config.isstrandpreserved);
        assert_eq!(config.kmerlen, 31);
        assert_eq!(config.listfname, "inputs.txt");
        assert_eq!(config.minhashtype, MinhashType::PerfectHash);
        assert_eq!(config.nthreads, 8);
        assert_eq!(config.outfname, "out.sketch");
        assert_eq!(config.randseed, u64::MAX);
        assert_eq!(config.sketchsize64, 1);
    }

    #[test]
    fn test_comment_is_ignored() {
        let config =
            SketchConfig::parse_args(["--COMMENT=program began at noon"], &clock()).unwrap();
        assert_eq!(config, SketchConfig::new(&clock()));
    }

    #[test]
    fn test_help_requested() {
        let result = SketchConfig::parse_args(["--bbits=10", "--help"], &clock());
        assert!(matches!(
            result,
            Err(Error::UsageRequested { command: "sketch" })
        ));
    }

    #[test]
    fn test_unrecognized_option() {
        let result = SketchConfig::parse_args(["--bogus=1"], &clock());
        assert!(matches!(
            result,
            Err(Error::UnrecognizedOption { ref token, .. }) if token == "--bogus=1"
        ));
    }

    #[test]
    fn test_invalid_values() {
        for arg in [
            "--bbits=abc",
            "--bbits=0",
            "--bbits=65",
            "--kmerlen=-5",
            "--iscasepreserved=yes",
            "--minhashtype=3",
            "--nthreads=0",
            "--randseed=-1",
            "--sketchsize64",
            "--outfname=out\nx.sketch",
            "--listfname=list.txt\r",
        ] {
            let result = SketchConfig::parse_args([arg], &clock());
            assert!(
                matches!(result, Err(Error::InvalidValue { ref token, .. }) if token == arg),
                "{arg} should be rejected"
            );
        }
    }

    #[test]
    fn test_string_option_without_value_is_empty() {
        let config = SketchConfig::parse_args(["--outfname", "--listfname="], &clock()).unwrap();
        assert_eq!(config.outfname, "");
        assert_eq!(config.listfname, "");
    }

    #[test]
    fn test_positional_inputs_skip_list_resolution() {
        let config = SketchConfig::parse(
            ["a.fa", "--listfname=/nonexistent/list.txt"],
            &clock(),
            Cursor::new(""),
        )
        .unwrap();
        assert_eq!(config.infnames, vec!["a.fa"]);
    }

    #[test]
    fn test_inputs_from_stdin() {
        let stdin = Cursor::new("a.fa\nmulti.fa\tg1\t3\tg2\t5\n");
        let config = SketchConfig::parse(["--kmerlen=15"], &clock(), stdin).unwrap();
        assert_eq!(config.infnames, vec!["a.fa", "multi.fa\tg1\t3\tg2\t5"]);
    }

    #[test]
    fn test_help_line_on_stdin() {
        let stdin = Cursor::new("a.fa\n--help\n");
        let result = SketchConfig::parse(Vec::<String>::new(), &clock(), stdin);
        assert!(matches!(result, Err(Error::UsageRequested { .. })));
    }

    #[test]
    fn test_inputs_from_list_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "genomeA.fa").unwrap();
        writeln!(file, "multi.fa\tg1\t3").unwrap();
        file.flush().unwrap();

        let arg = format!("--listfname={}", file.path().display());
        let config = SketchConfig::parse([arg], &clock(), Cursor::new("ignored.fa\n")).unwrap();
        assert_eq!(config.infnames, vec!["genomeA.fa", "multi.fa\tg1\t3"]);
    }

    #[test]
    fn test_unreadable_list_file() {
        let result = SketchConfig::parse(
            ["--listfname=/nonexistent/list.txt"],
            &clock(),
            Cursor::new(""),
        );
        assert!(matches!(result, Err(Error::ListFileUnreadable { .. })));
    }
}
