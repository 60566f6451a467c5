//! Top-level CLI definition.
//!
//! Each command receives its tokens verbatim and parses them with its own
//! `--name=value` parser, so `--help` is left to the command.

use clap::{Parser, Subcommand};

/// Genome sketching and distance estimation.
#[derive(Debug, Parser)]
#[command(name = "bindash")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Reduce multiple genomes into one sketch.
    #[command(disable_help_flag = true)]
    Sketch {
        /// Options and input files, passed to the sketch parser.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Estimate distances between genomes of a query and a target sketch.
    #[command(disable_help_flag = true)]
    Dist {
        /// Options and sketches, passed to the dist parser.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_sketch_tokens_pass_through() {
        let cli = Cli::try_parse_from([
            "bindash",
            "sketch",
            "--bbits=10",
            "--kmerlen=15",
            "file1.fa",
            "--help",
        ])
        .unwrap();
        let Command::Sketch { args } = cli.command else {
            panic!("expected sketch");
        };
        assert_eq!(args, ["--bbits=10", "--kmerlen=15", "file1.fa", "--help"]);
    }

    #[test]
    fn test_global_flags_before_command() {
        let cli = Cli::try_parse_from(["bindash", "-vv", "dist", "q.sketch"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Dist { ref args } if args == &["q.sketch"]));
    }

    #[test]
    fn test_missing_command_is_error() {
        assert!(Cli::try_parse_from(["bindash"]).is_err());
        assert!(Cli::try_parse_from(["bindash", "exact"]).is_err());
    }
}
