//! Repository URL validation.
//!
//! The prompt loop only sees the [`Validator`] trait. [`GitRemoteValidator`]
//! is the concrete implementation: syntax and transport checks via
//! [`crate::git_url`], then a smart-HTTP discovery probe with curl.

mod error;
mod probe;
mod remote;

use async_trait::async_trait;

pub use error::{ErrorKind, ValidationError};
pub use probe::{classify_status, discovery_url, probe_repository, ProbeOutcome};
pub use remote::GitRemoteValidator;

/// Outcome of one validation call.
pub type ValidationResult = Result<(), ValidationError>;

/// Checks a candidate repository URL.
///
/// Called at most once per submitted URL; implementations handle their own
/// timeouts and never retry on behalf of the caller.
#[async_trait]
pub trait Validator: Send + Sync {
    async fn validate(&self, candidate: &str) -> ValidationResult;
}

#[async_trait]
impl<V: Validator + ?Sized> Validator for &V {
    async fn validate(&self, candidate: &str) -> ValidationResult {
        (**self).validate(candidate).await
    }
}

#[async_trait]
impl<V: Validator + ?Sized> Validator for Box<V> {
    async fn validate(&self, candidate: &str) -> ValidationResult {
        (**self).validate(candidate).await
    }
}
