//! File-level and directory-level wrappers around the sanitizer.
//!
//! A file is only rewritten when sanitizing actually changes it. A directory
//! sweep is non-recursive, stops at the first error, and leaves already
//! processed files as they are.
//!
//! License: MIT OR Apache-2.0

use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::UnemojiError;
use crate::sanitizer::{sanitize_with_summary, SanitizeSummary};

/// Directory swept when no explicit file is given, relative to the working directory.
pub const DEFAULT_DOCS_DIR: &str = "docs";

/// File name suffix selected by the directory sweep.
pub const MARKDOWN_EXTENSION: &str = ".md";

/// Options for processing a single file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileOptions {
    /// Report changes without writing them back.
    pub dry_run: bool,
}

/// Outcome for one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// Content changed and was written back.
    Modified,
    /// Content would change, but this was a dry run.
    WouldModify,
    /// Nothing to do; the file was not opened for writing.
    Unchanged,
}

impl FileStatus {
    pub fn is_changed(self) -> bool {
        !matches!(self, FileStatus::Unchanged)
    }
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub status: FileStatus,
    pub original: String,
    pub sanitized: String,
    pub summary: SanitizeSummary,
}

/// Sanitizes one file in place.
pub fn sanitize_file(path: &Path, options: &FileOptions) -> Result<FileReport, UnemojiError> {
    debug!("Reading {}", path.display());
    let original =
        fs::read_to_string(path).map_err(|e| UnemojiError::from_read(path.to_path_buf(), e))?;

    let result = sanitize_with_summary(&original);

    let status = if result.text == original {
        FileStatus::Unchanged
    } else if options.dry_run {
        FileStatus::WouldModify
    } else {
        fs::write(path, result.text.as_bytes()).map_err(|source| UnemojiError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Rewrote {} ({} edit(s))", path.display(), result.summary.total());
        FileStatus::Modified
    };

    debug!("{}: {:?}", path.display(), status);
    Ok(FileReport {
        path: path.to_path_buf(),
        status,
        original,
        sanitized: result.text,
        summary: result.summary,
    })
}

/// Lists the markdown files directly inside `dir`, in directory-listing order.
pub fn list_markdown_files(dir: &Path) -> Result<Vec<PathBuf>, UnemojiError> {
    let list_err = |source| UnemojiError::ListDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        let name = entry.file_name();
        if !name.to_string_lossy().ends_with(MARKDOWN_EXTENSION) {
            continue;
        }
        let path = entry.path();
        if !path.is_file() {
            debug!("Skipping {}: not a regular file", path.display());
            continue;
        }
        files.push(path);
    }

    debug!("Found {} markdown file(s) in {}", files.len(), dir.display());
    Ok(files)
}

/// Sanitizes every markdown file in `dir`, stopping at the first error.
pub fn sanitize_directory(dir: &Path, options: &FileOptions) -> Result<Vec<FileReport>, UnemojiError> {
    list_markdown_files(dir)?
        .iter()
        .map(|path| sanitize_file(path, options))
        .collect()
}
