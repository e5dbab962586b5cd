//! Error types for the housing/road analysis service.
//!
//! - [`LoadError`] - Failures while obtaining the dataset for a request
//! - [`ServerError`] - Startup and serving failures
//!
//! Malformed cell content is never an error: it is absorbed by the typing
//! and aggregation steps. Only resource access can fail a request.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Load Errors
// =============================================================================

/// Errors while loading the dataset behind the analysis endpoint.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The data file does not exist at the configured location.
    #[error("Data file not found: {}", .0.display())]
    SourceUnavailable(PathBuf),

    /// Any other failure while reading or processing the data file.
    #[error("Data load failed: {0}")]
    ProcessingFailure(#[from] std::io::Error),
}

impl LoadError {
    /// Fixed message exposed to API clients. Causes stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            LoadError::SourceUnavailable(_) => "Data file not found",
            LoadError::ProcessingFailure(_) => "Data load failed",
        }
    }
}

// =============================================================================
// Server Errors
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind the listening socket.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for dataset loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_converts_to_processing_failure() {
        let err: LoadError = io::Error::new(io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, LoadError::ProcessingFailure(_)));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_public_messages_hide_cause() {
        let missing = LoadError::SourceUnavailable(PathBuf::from("/srv/data/secret.csv"));
        assert_eq!(missing.public_message(), "Data file not found");
        assert!(missing.to_string().contains("secret.csv"));

        let failed = LoadError::ProcessingFailure(io::Error::new(io::ErrorKind::Other, "disk on fire"));
        assert_eq!(failed.public_message(), "Data load failed");
    }
}
