//! Unified diff rendering for changed files.

use diffy::{create_patch, Line as DiffLine};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::path::Path;

/// Writes a unified diff between `original` and `sanitized` for `path`.
pub fn print_diff<W: Write + ?Sized>(
    original: &str,
    sanitized: &str,
    path: &Path,
    writer: &mut W,
    supports_color: bool,
) -> io::Result<()> {
    let patch = create_patch(original, sanitized);
    let old_header = format!("--- {}", path.display());
    let new_header = format!("+++ {}", path.display());

    if supports_color {
        writeln!(writer, "{}", old_header.bold())?;
        writeln!(writer, "{}", new_header.bold())?;
    } else {
        writeln!(writer, "{}", old_header)?;
        writeln!(writer, "{}", new_header)?;
    }

    for hunk in patch.hunks() {
        let old = hunk.old_range();
        let new = hunk.new_range();
        let header = format!("@@ -{},{} +{},{} @@", old.start(), old.len(), new.start(), new.len());
        if supports_color {
            writeln!(writer, "{}", header.cyan())?;
        } else {
            writeln!(writer, "{}", header)?;
        }

        for line in hunk.lines() {
            match line {
                DiffLine::Delete(s) => {
                    let s = s.trim_end_matches('\n');
                    if supports_color {
                        writeln!(writer, "{}", format!("-{}", s).red())?;
                    } else {
                        writeln!(writer, "-{}", s)?;
                    }
                }
                DiffLine::Insert(s) => {
                    let s = s.trim_end_matches('\n');
                    if supports_color {
                        writeln!(writer, "{}", format!("+{}", s).green())?;
                    } else {
                        writeln!(writer, "+{}", s)?;
                    }
                }
                DiffLine::Context(s) => writeln!(writer, " {}", s.trim_end_matches('\n'))?,
            }
        }
    }
    Ok(())
}
