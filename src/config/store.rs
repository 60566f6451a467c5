//! Persisting a sketch configuration as a text header.
//!
//! The header is one `--name=value` line per field, preceded by
//! `--COMMENT=` provenance lines. Its first line is a header marker that the
//! reader skips; every later line goes through [`SketchConfig::apply`], so the
//! writer and the command-line parser can never disagree on syntax.

use crate::cli::options::{Token, check_single_line, classify};
use crate::config::{SKETCH_COMMAND, SketchConfig};
use crate::constants::{COMMENT_KEY, keys, revision};
use crate::error::{Error, Result};
use crate::utils::clock::format_ctime;
use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Provenance written as comments above the persisted fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    /// When the sketch run started.
    pub began: DateTime<Utc>,
    /// When the sketch run finished.
    pub ended: DateTime<Utc>,
    /// CPU seconds consumed by the run.
    pub cpu_seconds: u64,
    /// Build revision that produced the sketch.
    pub revision: String,
}

impl Provenance {
    /// Provenance for a run of this build.
    pub fn new(began: DateTime<Utc>, ended: DateTime<Utc>, cpu_time: Duration) -> Self {
        Self {
            began,
            ended,
            cpu_seconds: cpu_time.as_secs(),
            revision: revision().to_string(),
        }
    }
}

/// Render the full header text for `config`.
pub fn render_sketch_header(config: &SketchConfig, provenance: &Provenance) -> String {
    let mut lines = vec![
        format!("{COMMENT_KEY}=program began at {}", format_ctime(provenance.began)),
        format!("{COMMENT_KEY}=program ended at {}", format_ctime(provenance.ended)),
        format!(
            "{COMMENT_KEY}=program consumed {} CPU seconds",
            provenance.cpu_seconds
        ),
        format!("{COMMENT_KEY}=revision {}", provenance.revision),
    ];

    let fields: [(&str, String); 10] = [
        (keys::BBITS, config.bbits.to_string()),
        (keys::IS_CASE_PRESERVED, config.iscasepreserved.to_string()),
        (keys::IS_STRAND_PRESERVED, config.isstrandpreserved.to_string()),
        (keys::KMERLEN, config.kmerlen.to_string()),
        (keys::LISTFNAME, config.listfname.clone()),
        (keys::MINHASHTYPE, config.minhashtype.to_string()),
        (keys::NTHREADS, config.nthreads.to_string()),
        (keys::OUTFNAME, config.outfname.clone()),
        (keys::RANDSEED, config.randseed.to_string()),
        (keys::SKETCHSIZE64, config.sketchsize64.to_string()),
    ];
    lines.extend(fields.into_iter().map(|(key, value)| format!("{key}={value}")));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Write the header for `config` to its own `outfname`.
pub fn save_sketch_config(config: &SketchConfig, provenance: &Provenance) -> Result<()> {
    save_sketch_config_to(config, provenance, Path::new(&config.outfname))
}

/// Write the header for `config` to `path`.
///
/// Refuses string fields with line breaks, which could not be read back.
pub fn save_sketch_config_to(
    config: &SketchConfig,
    provenance: &Provenance,
    path: &Path,
) -> Result<()> {
    for (key, value) in [
        (keys::LISTFNAME, &config.listfname),
        (keys::OUTFNAME, &config.outfname),
    ] {
        check_single_line(value).map_err(|reason| Error::InvalidValue {
            command: SKETCH_COMMAND,
            token: format!("{key}={value}"),
            reason,
        })?;
    }

    let write_err = |e| Error::ConfigWrite {
        path: path.to_path_buf(),
        source: e,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(render_sketch_header(config, provenance).as_bytes())
        .map_err(write_err)?;
    writer.flush().map_err(write_err)?;

    debug!("Wrote sketch configuration to {}", path.display());
    Ok(())
}

/// Parse a header from `reader`; `origin` labels errors.
///
/// Starts from [`SketchConfig::default`], so fields absent from the header
/// keep their default values. Blank lines are skipped and positional lines
/// become inputs, as on the command line.
pub fn parse_sketch_header<R: BufRead>(reader: R, origin: &Path) -> Result<SketchConfig> {
    let read_err = |e| Error::ConfigRead {
        path: origin.to_path_buf(),
        source: e,
    };
    let corrupt = |line_number: usize, line: &str, reason: String| Error::CorruptConfig {
        path: origin.to_path_buf(),
        line_number,
        line: line.to_string(),
        reason,
    };

    let mut lines = reader.lines();
    match lines.next() {
        Some(first) => {
            first.map_err(read_err)?;
        }
        None => return Err(corrupt(1, "", "missing header line".to_string())),
    }

    let mut config = SketchConfig::default();
    for (idx, line) in lines.enumerate() {
        let line = line.map_err(read_err)?;
        let line_number = idx + 2;

        if line.trim().is_empty() {
            continue;
        }
        if matches!(classify(&line), Token::Positional(_)) {
            debug!(
                "Header line {line_number} of {} is not an option, keeping it as an input",
                origin.display()
            );
        }
        config
            .apply(&line)
            .map_err(|e| corrupt(line_number, &line, e.to_string()))?;
    }

    Ok(config)
}

/// Read the header persisted at `path`.
pub fn load_sketch_config(path: &Path) -> Result<SketchConfig> {
    let file = File::open(path).map_err(|e| Error::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_sketch_header(BufReader::new(file), path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::MinhashType;
    use crate::utils::clock::{Clock, FixedClock};
    use std::io::Cursor;
    use tempfile::TempDir;

    fn provenance() -> Provenance {
        let clock = FixedClock::from_unix_seconds(1_600_000_000);
        Provenance {
            began: clock.now(),
            ended: clock.now(),
            cpu_seconds: 3,
            revision: "abc123".to_string(),
        }
    }

    fn config() -> SketchConfig {
        SketchConfig::new(&FixedClock::from_unix_seconds(1_600_000_000))
    }

    #[test]
    fn test_header_field_order() {
        let text = render_sketch_header(&config(), &provenance());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 14);
        assert!(lines[0].starts_with("--COMMENT=program began at "));
        assert!(lines[1].starts_with("--COMMENT=program ended at "));
        assert_eq!(lines[2], "--COMMENT=program consumed 3 CPU seconds");
        assert_eq!(lines[3], "--COMMENT=revision abc123");
        assert_eq!(
            &lines[4..],
            &[
                "--bbits=14",
                "--iscasepreserved=false",
                "--isstrandpreserved=false",
                "--kmerlen=21",
                "--listfname=-",
                "--minhashtype=2",
                "--nthreads=1",
                "--outfname=sketch-at-time-1600000000",
                "--randseed=41",
                "--sketchsize64=32",
            ]
        );
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.sketch");

        let mut original = config();
        original.bbits = 10;
        original.iscasepreserved = true;
        original.minhashtype = MinhashType::MultiHashSingleMin;
        original.outfname = path.display().to_string();
        original.listfname = "my list.txt".to_string();
        original.randseed = u64::MAX;

        save_sketch_config(&original, &provenance()).unwrap();
        let restored = load_sketch_config(&path).unwrap();

        assert_eq!(restored, original);
    }

    #[test]
    fn test_infnames_are_not_persisted() {
        let mut original = config();
        original.infnames = vec!["a.fa".to_string()];
        let text = render_sketch_header(&original, &provenance());

        let restored = parse_sketch_header(Cursor::new(text), Path::new("mem")).unwrap();
        assert!(restored.infnames.is_empty());
        original.infnames.clear();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_first_line_is_skipped() {
        let text = "--bbits=not-a-number\n--bbits=9\n";
        let config = parse_sketch_header(Cursor::new(text), Path::new("mem")).unwrap();
        assert_eq!(config.bbits, 9);
    }

    #[test]
    fn test_corrupt_line_reports_line_and_path() {
        let text = "--COMMENT=header\n--kmerlen=21\n--kmerlen=twenty\n";
        let result = parse_sketch_header(Cursor::new(text), Path::new("bad.sketch"));
        let Err(Error::CorruptConfig {
            path,
            line_number,
            line,
            ..
        }) = result
        else {
            unreachable!("expected a corrupt config error");
        };
        assert_eq!(path, Path::new("bad.sketch"));
        assert_eq!(line_number, 3);
        assert_eq!(line, "--kmerlen=twenty");
    }

    #[test]
    fn test_blank_and_positional_lines_are_accepted() {
        let text = "--COMMENT=header\n\n--bbits=9\nstray.fa\n   \n--kmerlen=17\n";
        let config = parse_sketch_header(Cursor::new(text), Path::new("mem")).unwrap();
        assert_eq!(config.bbits, 9);
        assert_eq!(config.kmerlen, 17);
        assert_eq!(config.infnames, vec!["stray.fa"]);
    }

    #[test]
    fn test_unknown_and_help_lines_are_corrupt() {
        for bad in ["--unknown=1", "--help", "--kmerlen"] {
            let text = format!("--COMMENT=header\n{bad}\n");
            let result = parse_sketch_header(Cursor::new(text), Path::new("mem"));
            assert!(
                matches!(result, Err(Error::CorruptConfig { .. })),
                "'{bad}' should be corrupt"
            );
        }
    }

    #[test]
    fn test_empty_header_is_corrupt() {
        let result = parse_sketch_header(Cursor::new(""), Path::new("mem"));
        assert!(matches!(result, Err(Error::CorruptConfig { .. })));
    }

    #[test]
    fn test_line_breaks_are_not_written() {
        let dir = TempDir::new().unwrap();

        for outfname in ["out\nx.sketch", "out.sketch\r"] {
            let path = dir.path().join("broken.sketch");
            let mut config = config();
            config.outfname = outfname.to_string();

            let result = save_sketch_config_to(&config, &provenance(), &path);
            assert!(
                matches!(result, Err(Error::InvalidValue { .. })),
                "{outfname:?} should be refused"
            );
            assert!(!path.exists());
        }

        let mut config = config();
        config.listfname = "a\nb".to_string();
        let result = save_sketch_config_to(&config, &provenance(), &dir.path().join("l.sketch"));
        assert!(matches!(result, Err(Error::InvalidValue { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = load_sketch_config(Path::new("/nonexistent/a.sketch"));
        assert!(matches!(result, Err(Error::ConfigRead { .. })));
    }

    #[test]
    fn test_unwritable_destination() {
        let result = save_sketch_config_to(
            &config(),
            &provenance(),
            Path::new("/nonexistent/dir/out.sketch"),
        );
        assert!(matches!(result, Err(Error::ConfigWrite { .. })));
    }
}
