//! Bindash - genome sketching and distance estimation.
//!
//! This crate holds the command layer: option parsing for the `sketch` and
//! `dist` commands, persistence and compatibility checking of sketch
//! configurations, and resolution of input files into genome entities. The
//! hashing and distance statistics are supplied through [`engine`].

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod engine;
pub mod entity;
pub mod error;
pub mod output;
pub mod utils;

use clap::Parser;
use clap::error::ErrorKind;
use cli::usage::{dist_usage, sketch_usage, top_level_usage};
use cli::{Cli, Command};
use config::{
    DistConfig, Provenance, SketchConfig, load_sketch_config, save_sketch_config,
    verify_compatible,
};
use constants::APP_NAME;
use engine::{ConfigOnly, DistanceEngine, SketchEngine, SketchInput};
use entity::{EntityNameSet, build_entity_map};
use output::{DistTableWriter, ResultWriter};
use std::ffi::OsString;
use std::io::BufRead;
use std::time::Instant;
use tracing::{info, warn};
use utils::clock::{Clock, SystemClock};
use utils::cpu_time::process_cpu_time;

pub use error::{Error, Result};

/// Main entry point for the bindash CLI.
pub fn run() -> Result<()> {
    let stdin = std::io::stdin();
    run_with(
        std::env::args_os(),
        &SystemClock,
        stdin.lock(),
        &ConfigOnly,
        &ConfigOnly,
    )
}

/// Run a command line against the given clock, stdin and engines.
pub fn run_with<I, T, R>(
    args: I,
    clock: &dyn Clock,
    stdin: R,
    sketcher: &dyn SketchEngine,
    comparer: &dyn DistanceEngine,
) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    R: BufRead,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::DisplayVersion => {
            e.print()?;
            return Ok(());
        }
        Err(e) => {
            let reason = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                    "usage requested".to_string()
                }
                kind => kind.as_str().unwrap_or("invalid command line").to_string(),
            };
            eprint!("{}", top_level_usage(APP_NAME));
            return Err(Error::TopLevelUsage { reason });
        }
    };

    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Command::Sketch { args } => sketch_command(&args, clock, stdin, sketcher),
        Command::Dist { args } => dist_command(&args, comparer),
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    // A subscriber may already be installed when running in-process more than once.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Print a command's usage, preceded by the error unless it was a `--help` request.
fn report_usage(error: &Error, usage: &str) {
    if !error.is_usage_request() {
        eprintln!("{error}\n");
    }
    eprint!("{usage}");
}

fn sketch_command<R: BufRead>(
    args: &[String],
    clock: &dyn Clock,
    stdin: R,
    engine: &dyn SketchEngine,
) -> Result<()> {
    let started = Instant::now();
    let began = clock.now();

    let config = SketchConfig::parse(args, clock, stdin).inspect_err(|e| {
        if e.shows_usage() {
            report_usage(e, &sketch_usage(APP_NAME, &SketchConfig::new(clock)));
        }
    })?;

    if config.infnames.is_empty() {
        warn!("No input files given");
    }

    let (entities, _) = build_entity_map(&config.infnames, EntityNameSet::new())?;
    info!(
        "Sketching {} genome(s) from {} file(s) into {}",
        entities.entity_count(),
        entities.file_count(),
        config.outfname
    );

    engine.sketch(&config, &entities)?;

    let provenance = Provenance::new(began, clock.now(), process_cpu_time(started));
    save_sketch_config(&config, &provenance)?;

    info!(
        "Sketch written to {} ({} CPU seconds)",
        config.outfname, provenance.cpu_seconds
    );
    Ok(())
}

fn dist_command(args: &[String], engine: &dyn DistanceEngine) -> Result<()> {
    let config = DistConfig::parse(args).inspect_err(|e| {
        if e.shows_usage() {
            report_usage(e, &dist_usage(APP_NAME, &DistConfig::default()));
        }
    })?;

    let query_config = load_sketch_config(config.query())?;
    let target_config = if config.is_self_comparison() {
        query_config.clone()
    } else {
        load_sketch_config(config.target())?
    };

    verify_compatible(
        &query_config,
        config.query(),
        &target_config,
        config.target(),
    )?;

    let mut writer = DistTableWriter::create(&config.outfname)?;
    engine.compare(
        SketchInput {
            path: config.query(),
            config: &query_config,
        },
        SketchInput {
            path: config.target(),
            config: &target_config,
        },
        &config,
        &mut writer,
    )?;
    writer.finalize()?;

    info!("Reported {} pair(s) to {}", writer.records(), config.outfname);
    Ok(())
}
