//! Syntax errors for git remote URLs.

use thiserror::Error;

/// Why a string could not be read as a git remote URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GitUrlError {
    #[error("URL is empty")]
    Empty,
    #[error("URL contains whitespace")]
    ContainsWhitespace,
    #[error("URL has no scheme and is not in user@host:path form")]
    MissingScheme,
    #[error("malformed URL: {0}")]
    Malformed(String),
    #[error("URL has no host")]
    MissingHost,
    #[error("URL has no repository path")]
    MissingPath,
    #[error("URL must not carry a query or fragment")]
    QueryOrFragment,
}
