// mdxsan/src/main.rs
//! mdxsan entry point.
//!
//! Parses arguments, sets up logging and runs the sanitizer over the docs
//! tree. Exit code 0 on success, 1 when a fatal error occurs, when a file
//! could not be processed, or when `--check` finds work to do.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use is_terminal::IsTerminal;
use log::LevelFilter;

use mdxsan::cli::Cli;
use mdxsan::logger;
use mdxsan::{run_sanitize, SanitizeOptions};

fn main() -> ExitCode {
    let args = Cli::parse();

    let level = if args.debug {
        Some(LevelFilter::Debug)
    } else if args.quiet {
        Some(LevelFilter::Error)
    } else {
        None
    };
    logger::init_logger(level);

    let opts = SanitizeOptions {
        root: args.root,
        config_path: args.config,
        check: args.check,
        diff: args.diff,
        quiet: args.quiet,
    };

    let stdout = io::stdout();
    let color = stdout.is_terminal();
    let mut out = stdout.lock();
    let mut err = io::stderr();

    match run_sanitize(&opts, &mut out, &mut err, color) {
        Ok(status) => {
            let _ = out.flush();
            ExitCode::from(status.exit_code())
        }
        Err(e) => {
            let _ = out.flush();
            let _ = writeln!(err, "Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
