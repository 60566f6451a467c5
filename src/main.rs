//! Bindash CLI entry point.

#![allow(clippy::print_stderr)]

fn main() {
    if let Err(e) = bindash::run() {
        // Usage-class errors were already reported together with the usage text.
        if !e.shows_usage() {
            eprintln!("error: {e}");
        }
        std::process::exit(e.exit_code());
    }
}
