// unemoji-core/src/lib.rs
//! # unemoji Core Library
//!
//! `unemoji-core` turns emoji-laden text into plain ASCII-friendly text. It
//! applies a fixed, ordered Substitution Table (emoji and drawing symbols to
//! bracketed tags or ASCII art), then deletes whatever is left in a fixed set
//! of emoji code point ranges.
//!
//! ## Modules
//!
//! * `table`: the ordered Substitution Table.
//! * `sweep`: the fallback Unicode-range sweep.
//! * `sanitizer`: `sanitize` and `sanitize_with_summary`.
//! * `files`: file-level and directory-level wrappers.
//! * `errors`: the `UnemojiError` type for filesystem failures.
//!
//! ## Usage Example
//!
//! ```rust
//! use unemoji_core::sanitize;
//!
//! assert_eq!(sanitize("Status: \u{2705} done"), "Status: [OK] done");
//! assert_eq!(sanitize("a \u{2192} b"), "a -> b");
//! ```
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod errors;
pub mod files;
pub mod sanitizer;
pub mod sweep;
pub mod table;

pub use errors::UnemojiError;

pub use files::{
    list_markdown_files,
    sanitize_directory,
    sanitize_file,
    FileOptions,
    FileReport,
    FileStatus,
    DEFAULT_DOCS_DIR,
    MARKDOWN_EXTENSION,
};

pub use sanitizer::{sanitize, sanitize_with_summary, SanitizeSummary, Sanitized, SubstitutionSummaryItem};

pub use sweep::{count_fallback, is_fallback_char, strip_fallback, FALLBACK_RANGES};

pub use table::SUBSTITUTIONS;
