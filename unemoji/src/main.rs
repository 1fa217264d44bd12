// unemoji/src/main.rs
//! unemoji entry point.
//!
//! Parses arguments, sets up logging and runs the clean command. Any failure
//! aborts the run with a non-zero exit status.

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use log::{LevelFilter, debug, info};
use std::io;
use std::process::ExitCode;

use unemoji::cli::Cli;
use unemoji::commands::clean::{CleanOptions, Console, Target, run_clean};
use unemoji::logger;
use unemoji::ui::output_format;
use unemoji_core::FileOptions;

fn main() -> ExitCode {
    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let stderr_supports_color = io::stderr().is_terminal();
            let _ = output_format::print_error_message(
                &mut io::stderr(),
                &format!("{:#}", e),
                stderr_supports_color,
            );
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cli) -> Result<()> {
    info!("unemoji started. Version: {}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    let target = match args.path {
        Some(path) => Target::File(path),
        None => Target::DocsDir(args.docs_dir),
    };

    let opts = CleanOptions {
        target,
        file_options: FileOptions { dry_run: args.dry_run },
        diff: args.diff,
        summary: args.summary,
        quiet: args.quiet,
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    let out_color = stdout.is_terminal();
    let err_color = stderr.is_terminal();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    let mut console = Console {
        out: &mut out,
        err: &mut err,
        out_color,
        err_color,
    };

    let stats = run_clean(&opts, &mut console)?;
    info!("unemoji finished: {} file(s) processed, {} changed.", stats.processed, stats.changed);
    Ok(())
}
