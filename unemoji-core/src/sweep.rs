//! Fallback sweep: deletes any character left over after table substitution
//! whose code point falls inside a fixed set of Unicode ranges.
//!
//! The ranges are a best-effort emoji detector. They both under-match (newer
//! blocks such as Supplemental Symbols and Pictographs past `U+1F251` survive)
//! and over-match (the last range swallows everything from `U+24C2` to
//! `U+1F251`, CJK included). They are kept as-is so output stays stable.
//!
//! License: MIT OR Apache-2.0

use lazy_static::lazy_static;
use log::debug;
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;
use std::ops::RangeInclusive;

/// Code point ranges removed by the sweep, with a label for each.
pub const FALLBACK_RANGES: [(RangeInclusive<char>, &str); 6] = [
    ('\u{1F600}'..='\u{1F64F}', "emoticons"),
    ('\u{1F300}'..='\u{1F5FF}', "symbols & pictographs"),
    ('\u{1F680}'..='\u{1F6FF}', "transport & map symbols"),
    ('\u{1F1E0}'..='\u{1F1FF}', "flags"),
    ('\u{2702}'..='\u{27B0}', "dingbats"),
    ('\u{24C2}'..='\u{1F251}', "enclosed characters"),
];

lazy_static! {
    static ref FALLBACK_REGEX: Regex = build_fallback_regex();
}

fn build_fallback_regex() -> Regex {
    let class: String = FALLBACK_RANGES
        .iter()
        .map(|(range, _)| {
            format!("\\x{{{:X}}}-\\x{{{:X}}}", *range.start() as u32, *range.end() as u32)
        })
        .collect();
    let pattern = format!("[{}]+", class);
    debug!(target: "unemoji_core::sweep", "Compiling fallback pattern {}", pattern);
    RegexBuilder::new(&pattern)
        .unicode(true)
        .build()
        .expect("fallback character class is a valid regex")
}

/// Returns true if `c` lies in any of the fallback ranges.
pub fn is_fallback_char(c: char) -> bool {
    FALLBACK_RANGES.iter().any(|(range, _)| range.contains(&c))
}

/// Deletes every fallback-range character from `text`.
///
/// Borrows the input unchanged when there is nothing to delete.
pub fn strip_fallback(text: &str) -> Cow<'_, str> {
    FALLBACK_REGEX.replace_all(text, "")
}

/// Counts the characters `strip_fallback` would delete.
pub fn count_fallback(text: &str) -> usize {
    FALLBACK_REGEX
        .find_iter(text)
        .map(|m| m.as_str().chars().count())
        .sum()
}
