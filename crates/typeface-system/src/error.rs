// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Failures while scanning or loading font files
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Failed to read font file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid font data in {path}: {reason}")]
    InvalidFontData { path: PathBuf, reason: String },

    #[error("Font cache lock poisoned")]
    LockPoisoned,
}

pub type DiscoveryResult<T> = Result<T, DiscoveryError>;
