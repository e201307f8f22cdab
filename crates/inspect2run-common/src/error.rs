//! Unified error types for the inspect2run workspace.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The input path could not be resolved or stat-ed.
    #[error("Error checking file {path}: {source}")]
    FileAccess {
        /// Path that could not be checked.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The input file exists but could not be read.
    #[error("Error reading file {path}: {source}")]
    FileRead {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Standard input could not be read.
    #[error("Error reading stdin: {source}")]
    StdinRead {
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The document is not a JSON array of inspect records.
    #[error("Error parsing json: {source}")]
    Decode {
        /// Underlying deserialization error.
        #[from]
        source: serde_json::Error,
    },

    /// The document decoded to an empty array.
    #[error("Error parsing json: no container records in input")]
    EmptyInput,

    /// A link entry does not have the `/source:/container/alias` shape.
    #[error("invalid link entry: {link}")]
    InvalidLink {
        /// The offending link entry.
        link: String,
    },
}

impl TranslateError {
    /// Returns `true` if the error comes from decoding rather than I/O.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Decode { .. } | Self::EmptyInput | Self::InvalidLink { .. }
        )
    }
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, TranslateError>;
