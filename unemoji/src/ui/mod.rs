//! Console rendering: progress lines, diffs and substitution summaries.

pub mod diff_viewer;
pub mod output_format;
pub mod summary;
