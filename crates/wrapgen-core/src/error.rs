//! Error types for wrapgen

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for generator operations
pub type GenResult<T> = Result<T, GenError>;

/// Error type for generator operations
#[derive(Error, Debug)]
pub enum GenError {
    /// Unbalanced or inconsistent bracket nesting in a type descriptor
    #[error("malformed type `{descriptor}`: {reason}")]
    MalformedType { descriptor: String, reason: String },

    /// Accessor convention applied to a member that does not follow it
    #[error("invalid member name for accessor: {0}")]
    InvalidMemberName(String),

    /// Qualified-name helper applied to a name without a namespace
    #[error("invalid class name: {0}")]
    InvalidIdentifier(String),

    /// The output sink could not be created
    #[error("cannot create output {path:?}: {source}")]
    ResourceAcquisition {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing or closing an acquired output failed
    #[error("cannot write output {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl GenError {
    /// Shorthand for a [`GenError::MalformedType`]
    pub fn malformed(descriptor: impl Into<String>, reason: impl Into<String>) -> Self {
        GenError::MalformedType {
            descriptor: descriptor.into(),
            reason: reason.into(),
        }
    }

    /// Returns a stable error code, used as the CLI exit status
    pub fn error_code(&self) -> u32 {
        match self {
            GenError::MalformedType { .. } => 1,
            GenError::InvalidMemberName(_) => 2,
            GenError::InvalidIdentifier(_) => 3,
            GenError::ResourceAcquisition { .. } => 4,
            GenError::Write { .. } => 5,
            GenError::Config(_) => 6,
        }
    }

    /// Whether the error comes from the structure of the input rather than I/O
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            GenError::MalformedType { .. }
                | GenError::InvalidMemberName(_)
                | GenError::InvalidIdentifier(_)
        )
    }
}

impl From<serde_json::Error> for GenError {
    fn from(err: serde_json::Error) -> Self {
        GenError::Config(err.to_string())
    }
}
