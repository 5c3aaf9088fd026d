//! errors.rs - Custom error types for the mdxsan-core library.
//!
//! Only locator and file I/O failures are errors. Escaping itself never fails:
//! unterminated code spans, unterminated fences and documents without markers
//! are ordinary input.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// All error types raised by `mdxsan-core`.
///
/// `#[non_exhaustive]` so new variants can be added without breaking callers.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MdxsanError {
    #[error("Docs root '{}' does not exist or is not a directory", .0.display())]
    RootNotFound(PathBuf),

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl MdxsanError {
    /// Wraps an `std::io::Error` together with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MdxsanError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MdxsanError>;
