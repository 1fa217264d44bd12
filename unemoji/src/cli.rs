// unemoji/src/cli.rs
//! Command-line interface definition for `unemoji`.

use clap::Parser;
use std::path::PathBuf;

use unemoji_core::DEFAULT_DOCS_DIR;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "unemoji",
    version = env!("CARGO_PKG_VERSION"),
    about = "Replace emoji in markdown files with plain ASCII",
    long_about = "unemoji rewrites text files in place, replacing a fixed set of emoji and box-drawing symbols with ASCII tags such as [OK] or ->, and deleting any other emoji in the common emoji code point ranges. With no FILE, every *.md file in the docs directory is processed."
)]
pub struct Cli {
    /// A single file to sanitize. When omitted, the docs directory is swept.
    #[arg(value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Directory whose *.md files are swept when no FILE is given.
    #[arg(
        long = "docs-dir",
        value_name = "DIR",
        env = "UNEMOJI_DOCS_DIR",
        default_value = DEFAULT_DOCS_DIR,
        help = "Directory whose *.md files are swept when no FILE is given."
    )]
    pub docs_dir: PathBuf,

    /// Report what would change without writing anything.
    #[arg(long = "dry-run", short = 'n', help = "Report what would change without writing anything.")]
    pub dry_run: bool,

    /// Print a unified diff for every changed file.
    #[arg(long, short = 'D', help = "Print a unified diff for every changed file.")]
    pub diff: bool,

    /// Print which substitutions were made in every changed file.
    #[arg(long, short = 's', help = "Print which substitutions were made in every changed file.")]
    pub summary: bool,

    /// Suppress the per-file progress lines.
    #[arg(long, short = 'q', help = "Suppress the per-file progress lines and all logging.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(long, short = 'd', conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,
}
