//! Per-file progress lines and colored status messages.
//!
//! The progress format is fixed: a `Processing:` line naming the file,
//! followed by an indented `->` line with the outcome.

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::path::Path;

use unemoji_core::FileStatus;

pub fn print_processing<W: Write + ?Sized>(writer: &mut W, path: &Path) -> io::Result<()> {
    writeln!(writer, "Processing: {}", path.display())
}

pub fn status_text(status: FileStatus) -> &'static str {
    match status {
        FileStatus::Modified => "Cleaned",
        FileStatus::WouldModify => "Would clean",
        FileStatus::Unchanged => "No changes needed",
    }
}

pub fn print_status<W: Write + ?Sized>(writer: &mut W, status: FileStatus, supports_color: bool) -> io::Result<()> {
    let text = status_text(status);
    if !supports_color {
        return writeln!(writer, "  -> {}", text);
    }
    match status {
        FileStatus::Modified => writeln!(writer, "  -> {}", text.green()),
        FileStatus::WouldModify => writeln!(writer, "  -> {}", text.yellow()),
        FileStatus::Unchanged => writeln!(writer, "  -> {}", text.dimmed()),
    }
}

pub fn print_error_message<W: Write + ?Sized>(writer: &mut W, message: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "error:".red().bold(), message)
    } else {
        writeln!(writer, "error: {}", message)
    }
}
