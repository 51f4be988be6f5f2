//! Validation error type shared by all validators.

use thiserror::Error;

/// High-level classification of a validation failure.
///
/// The prompt picks its feedback from the kind alone; the details stay on
/// [`ValidationError`] for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input is not a git remote URL.
    Parse,
    /// Remote uses a transport other than HTTPS.
    UnknownTransport,
    /// Remote repository is missing or unreachable.
    NotFound,
    /// Anything else (unexpected HTTP status, probe failure).
    Other,
}

/// Why a candidate URL was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid git repository URL {url:?}: {reason}")]
    Parse { url: String, reason: String },

    #[error("unsupported transport {transport:?} in {url:?}")]
    UnknownTransport {
        url: String,
        transport: String,
        /// HTTPS equivalent of `url`, when one exists.
        suggestion: Option<String>,
    },

    #[error("git repository not found at {url:?}")]
    NotFound { url: String },

    #[error("could not check {url:?}: {message}")]
    Other { url: String, message: String },
}

impl ValidationError {
    pub fn parse(url: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::Parse {
            url: url.into(),
            reason: reason.into(),
        }
    }

    pub fn unknown_transport(
        url: impl Into<String>,
        transport: impl Into<String>,
        suggestion: Option<String>,
    ) -> Self {
        ValidationError::UnknownTransport {
            url: url.into(),
            transport: transport.into(),
            suggestion,
        }
    }

    pub fn not_found(url: impl Into<String>) -> Self {
        ValidationError::NotFound { url: url.into() }
    }

    pub fn other(url: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError::Other {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::Parse { .. } => ErrorKind::Parse,
            ValidationError::UnknownTransport { .. } => ErrorKind::UnknownTransport,
            ValidationError::NotFound { .. } => ErrorKind::NotFound,
            ValidationError::Other { .. } => ErrorKind::Other,
        }
    }

    /// The candidate URL that was rejected.
    pub fn url(&self) -> &str {
        match self {
            ValidationError::Parse { url, .. }
            | ValidationError::UnknownTransport { url, .. }
            | ValidationError::NotFound { url }
            | ValidationError::Other { url, .. } => url,
        }
    }

    /// Translated URL offered in place of the rejected one.
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            ValidationError::UnknownTransport { suggestion, .. } => suggestion.as_deref(),
            _ => None,
        }
    }
}
