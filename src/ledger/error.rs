//! Error types exposed by the review ledger layer.

use thiserror::Error;

/// Errors surfaced while loading configuration, initialising the ledger,
/// or persisting review decisions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CullError {
    /// The CLI did not include a directory to review.
    #[error("review directory is required (use --directory or -d)")]
    MissingDirectory,

    /// Configuration could not be loaded or was invalid.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The review directory was missing or unreadable, or a persisted
    /// ledger file could not be parsed.
    #[error("failed to initialise review ledger: {message}")]
    Initialisation {
        /// Error detail from the directory scan or ledger file parse.
        message: String,
    },

    /// Writing the ledger file failed. Non-fatal: the in-memory ledger is
    /// left intact and the session may continue.
    #[error("failed to persist review ledger: {message}")]
    Persistence {
        /// Error detail from the underlying CSV write.
        message: String,
    },

    /// Local I/O operation failed (e.g. writing the summary to stdout).
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// The terminal user interface failed to start or run.
    #[error("TUI error: {message}")]
    Tui {
        /// Error detail from the TUI framework.
        message: String,
    },
}

impl CullError {
    /// Wraps an error as an [`CullError::Initialisation`] variant.
    pub(crate) fn initialisation(error: &dyn std::fmt::Display) -> Self {
        Self::Initialisation {
            message: error.to_string(),
        }
    }

    /// Wraps an error as a [`CullError::Persistence`] variant.
    pub(crate) fn persistence(error: &dyn std::fmt::Display) -> Self {
        Self::Persistence {
            message: error.to_string(),
        }
    }
}
