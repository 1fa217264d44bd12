//! errors.rs - Error type for the unemoji-core library.
//!
//! `sanitize` itself cannot fail; every variant here comes from touching the
//! filesystem and carries the path involved.
//!
//! License: MIT OR Apache-2.0

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum UnemojiError {
    #[error("Failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("File '{}' is not valid UTF-8", path.display())]
    InvalidUtf8 { path: PathBuf },

    #[error("Failed to write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to list directory '{}': {source}", path.display())]
    ListDir { path: PathBuf, source: io::Error },
}

impl UnemojiError {
    /// Classifies a read failure, splitting out undecodable content.
    pub(crate) fn from_read(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::InvalidData {
            UnemojiError::InvalidUtf8 { path }
        } else {
            UnemojiError::Read { path, source }
        }
    }
}
