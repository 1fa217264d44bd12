//! The text sanitizer: table substitution followed by the fallback sweep.
//!
//! Both entry points are pure. `sanitize` only returns the text;
//! `sanitize_with_summary` also reports what was replaced, for the CLI's
//! summary and dry-run output.
//!
//! License: MIT OR Apache-2.0

use log::debug;

use crate::sweep;
use crate::table;

/// How many times a single table entry fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionSummaryItem {
    pub pattern: &'static str,
    pub replacement: &'static str,
    pub occurrences: usize,
}

/// Everything a sanitization pass changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanitizeSummary {
    /// Table entries that matched at least once, in table order.
    pub substitutions: Vec<SubstitutionSummaryItem>,
    /// Characters deleted by the fallback sweep.
    pub fallback_removed: usize,
}

impl SanitizeSummary {
    /// Total number of edits: table hits plus swept characters.
    pub fn total(&self) -> usize {
        self.substitutions.iter().map(|s| s.occurrences).sum::<usize>() + self.fallback_removed
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Sanitized text together with its summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized {
    pub text: String,
    pub summary: SanitizeSummary,
}

/// Replaces table keys with their ASCII text, then deletes any remaining
/// fallback-range characters.
pub fn sanitize(text: &str) -> String {
    let mut working = text.to_string();
    for &(pattern, replacement) in table::entries() {
        if working.contains(pattern) {
            working = working.replace(pattern, replacement);
        }
    }
    sweep::strip_fallback(&working).into_owned()
}

/// Same transformation as [`sanitize`], also counting every edit.
pub fn sanitize_with_summary(text: &str) -> Sanitized {
    let mut working = text.to_string();
    let mut summary = SanitizeSummary::default();

    for &(pattern, replacement) in table::entries() {
        let occurrences = working.matches(pattern).count();
        if occurrences == 0 {
            continue;
        }
        debug!("Replacing {} occurrence(s) of {:?} with {:?}", occurrences, pattern, replacement);
        working = working.replace(pattern, replacement);
        summary.substitutions.push(SubstitutionSummaryItem {
            pattern,
            replacement,
            occurrences,
        });
    }

    summary.fallback_removed = sweep::count_fallback(&working);
    if summary.fallback_removed > 0 {
        debug!("Fallback sweep removing {} character(s)", summary.fallback_removed);
        working = sweep::strip_fallback(&working).into_owned();
    }

    Sanitized { text: working, summary }
}
