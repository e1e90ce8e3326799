//! Error types for PDF conversion

use std::path::PathBuf;
use thiserror::Error;

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that can occur during Markdown-to-PDF conversion
///
/// Categories are kept distinct so callers can tell an I/O failure from an
/// external-process failure from a configuration failure. None of these are
/// retried automatically.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Input file does not exist
    #[error("input file not found: {0}")]
    InputNotFound(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The pandoc binary could not be launched
    #[error("failed to launch {bin}: {source}")]
    PandocLaunch {
        bin: String,
        #[source]
        source: std::io::Error,
    },

    /// Pandoc ran but exited with a nonzero status
    #[error("pandoc exited with status {status}: {stderr}")]
    PandocFailed { status: i32, stderr: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Front matter could not be parsed or serialized
    #[error("invalid front matter: {0}")]
    FrontMatter(#[from] serde_yaml::Error),
}
