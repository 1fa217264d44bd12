//! Substitution summary for a changed file.
//!
//! Patterns are printed as code points so the summary itself stays ASCII.

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::path::Path;

use unemoji_core::SanitizeSummary;

/// Formats a pattern as space-separated `U+XXXX` code points.
pub fn code_points(pattern: &str) -> String {
    pattern
        .chars()
        .map(|c| format!("U+{:04X}", c as u32))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn print_summary<W: Write + ?Sized>(
    path: &Path,
    summary: &SanitizeSummary,
    writer: &mut W,
    supports_color: bool,
) -> io::Result<()> {
    let title = format!("Substitutions in {} ({} edit(s)):", path.display(), summary.total());
    if supports_color {
        writeln!(writer, "{}", title.bold())?;
    } else {
        writeln!(writer, "{}", title)?;
    }

    for item in &summary.substitutions {
        let replacement = if item.replacement.is_empty() {
            "(removed)".to_string()
        } else {
            item.replacement.to_string()
        };
        let count = format!("x{}", item.occurrences);
        if supports_color {
            writeln!(writer, "  {} -> {} {}", code_points(item.pattern).cyan(), replacement, count.yellow())?;
        } else {
            writeln!(writer, "  {} -> {} {}", code_points(item.pattern), replacement, count)?;
        }
    }

    if summary.fallback_removed > 0 {
        writeln!(writer, "  other emoji removed: {}", summary.fallback_removed)?;
    }
    Ok(())
}
