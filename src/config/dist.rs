//! Configuration of the `dist` command.

use crate::cli::options::{OptionError, Token, classify, parse_number, parse_positive, parse_string};
use crate::constants::{STDIO_PATH, dist_defaults, keys};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Name of the dist command.
pub const DIST_COMMAND: &str = "dist";

/// Settings of one `dist` invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct DistConfig {
    /// Query sketch, optionally followed by the target sketch.
    pub infnames: Vec<PathBuf>,
    /// Intersections smaller than this count as empty.
    pub ithres: usize,
    /// Largest reported mutation distance.
    pub mthres: f64,
    /// Best hits reported per query; 0 reports all.
    pub nneighbors: usize,
    /// Worker threads for the distance engine.
    pub nthreads: usize,
    /// Result path (`-` = stdout).
    pub outfname: String,
    /// Largest reported p-value.
    pub pthres: f64,
}

impl Default for DistConfig {
    fn default() -> Self {
        Self {
            infnames: Vec::new(),
            ithres: dist_defaults::ITHRES,
            mthres: dist_defaults::MTHRES,
            nneighbors: dist_defaults::NNEIGHBORS,
            nthreads: dist_defaults::NTHREADS,
            outfname: STDIO_PATH.to_string(),
            pthres: dist_defaults::PTHRES,
        }
    }
}

impl DistConfig {
    /// Apply one token to this configuration.
    pub fn apply(&mut self, arg: &str) -> std::result::Result<(), OptionError> {
        match classify(arg) {
            Token::Help => Err(OptionError::HelpRequested),
            Token::Comment => Ok(()),
            Token::Positional(path) => {
                self.infnames.push(PathBuf::from(path));
                Ok(())
            }
            Token::Option { key, value } => {
                let invalid = OptionError::invalid(arg);
                match key {
                    keys::ITHRES => self.ithres = parse_number(value).map_err(invalid)?,
                    keys::MTHRES => self.mthres = parse_number(value).map_err(invalid)?,
                    keys::NNEIGHBORS => self.nneighbors = parse_number(value).map_err(invalid)?,
                    keys::NTHREADS => self.nthreads = parse_positive(value).map_err(invalid)?,
                    keys::OUTFNAME => self.outfname = parse_string(value).map_err(invalid)?,
                    keys::PTHRES => self.pthres = parse_number(value).map_err(invalid)?,
                    _ => return Err(OptionError::unrecognized(arg)),
                }
                Ok(())
            }
        }
    }

    /// Parse command-line tokens and check the sketch count.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        for arg in args {
            config
                .apply(arg.as_ref())
                .map_err(|e| e.into_error(DIST_COMMAND))?;
        }

        if !(1..=2).contains(&config.infnames.len()) {
            return Err(Error::WrongArgumentCount {
                count: config.infnames.len(),
            });
        }

        Ok(config)
    }

    /// The query sketch.
    pub fn query(&self) -> &Path {
        self.infnames.first().map_or(Path::new(""), PathBuf::as_path)
    }

    /// The target sketch; the query itself when only one sketch was given.
    pub fn target(&self) -> &Path {
        self.infnames
            .get(1)
            .map_or_else(|| self.query(), PathBuf::as_path)
    }

    /// Whether the query is compared against itself.
    pub fn is_self_comparison(&self) -> bool {
        self.infnames.len() == 1
    }
}
