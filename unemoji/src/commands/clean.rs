//! The clean command: sanitize one file, or every markdown file in the docs
//! directory, reporting progress as it goes.

use anyhow::{Context, Result};
use log::{debug, info};
use std::io::Write;
use std::path::PathBuf;

use unemoji_core::{list_markdown_files, sanitize_file, FileOptions, FileReport, FileStatus};

use crate::ui::{diff_viewer, output_format, summary};

/// What to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    File(PathBuf),
    DocsDir(PathBuf),
}

/// Options for `run_clean`.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    pub target: Target,
    pub file_options: FileOptions,
    pub diff: bool,
    pub summary: bool,
    pub quiet: bool,
}

/// Counts for a finished run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CleanStats {
    pub processed: usize,
    pub changed: usize,
}

/// Where the command writes. `out` receives progress and diffs, `err` the summaries.
pub struct Console<'a> {
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
    pub out_color: bool,
    pub err_color: bool,
}

/// Runs the clean operation. Aborts on the first file that fails; files
/// handled before that keep their changes.
pub fn run_clean(opts: &CleanOptions, console: &mut Console<'_>) -> Result<CleanStats> {
    let files = match &opts.target {
        Target::File(path) => vec![path.clone()],
        Target::DocsDir(dir) => {
            info!("Sweeping markdown files in {}", dir.display());
            list_markdown_files(dir)
                .with_context(|| format!("Failed to collect markdown files from {}", dir.display()))?
        }
    };

    let mut stats = CleanStats::default();
    for path in &files {
        if !opts.quiet {
            output_format::print_processing(&mut *console.out, path)?;
        }

        let report = sanitize_file(path, &opts.file_options)
            .with_context(|| format!("Failed to sanitize {}", path.display()))?;

        report_file(&report, opts, console)?;

        stats.processed += 1;
        if report.status.is_changed() {
            stats.changed += 1;
        }
    }

    debug!("Processed {} file(s), {} changed.", stats.processed, stats.changed);
    Ok(stats)
}

fn report_file(report: &FileReport, opts: &CleanOptions, console: &mut Console<'_>) -> Result<()> {
    if !opts.quiet {
        output_format::print_status(&mut *console.out, report.status, console.out_color)?;
    }

    if report.status == FileStatus::Unchanged {
        return Ok(());
    }

    if opts.diff {
        diff_viewer::print_diff(
            &report.original,
            &report.sanitized,
            &report.path,
            &mut *console.out,
            console.out_color,
        )?;
    }

    if opts.summary {
        summary::print_summary(&report.path, &report.summary, &mut *console.err, console.err_color)?;
    }
    Ok(())
}
