//! Validator for real git remotes.

use async_trait::async_trait;

use super::error::ValidationError;
use super::probe::{probe_repository, ProbeOutcome};
use super::{ValidationResult, Validator};
use crate::config::{GitaskConfig, ProbeConfig};
use crate::git_url::{parse_git_url, GitUrl, Transport};

/// Accepts HTTPS remotes that answer the smart-HTTP discovery request.
#[derive(Debug, Clone)]
pub struct GitRemoteValidator {
    probe: ProbeConfig,
    allow_http: bool,
}

impl GitRemoteValidator {
    pub fn new(probe: ProbeConfig, allow_http: bool) -> Self {
        Self { probe, allow_http }
    }

    pub fn from_config(cfg: &GitaskConfig) -> Self {
        Self::new(cfg.probe(), cfg.allow_http)
    }

    /// Disable the network probe (syntax and transport checks only).
    pub fn without_probe(mut self) -> Self {
        self.probe.enabled = false;
        self
    }

    /// Syntax and transport checks, without touching the network.
    pub fn check_syntax(&self, candidate: &str) -> Result<GitUrl, ValidationError> {
        let url = parse_git_url(candidate)
            .map_err(|e| ValidationError::parse(candidate, e.to_string()))?;

        let supported =
            url.transport == Transport::Https || (url.transport.is_http() && self.allow_http);
        if !supported {
            return Err(ValidationError::unknown_transport(
                candidate,
                url.transport.as_str(),
                url.to_https(),
            ));
        }
        Ok(url)
    }
}

#[async_trait]
impl Validator for GitRemoteValidator {
    async fn validate(&self, candidate: &str) -> ValidationResult {
        let url = self.check_syntax(candidate)?;
        if !self.probe.enabled {
            return Ok(());
        }

        let outcome = tokio::task::spawn_blocking({
            let target = url.raw.clone();
            let settings = self.probe.clone();
            move || probe_repository(&target, &settings)
        })
        .await
        .map_err(|e| ValidationError::other(candidate, format!("probe task failed: {e}")))?;

        match outcome {
            ProbeOutcome::Found => Ok(()),
            ProbeOutcome::Missing(code) => {
                tracing::debug!("{} answered HTTP {}", candidate, code);
                Err(ValidationError::not_found(candidate))
            }
            ProbeOutcome::Unreachable(reason) => {
                tracing::debug!("{} unreachable: {}", candidate, reason);
                Err(ValidationError::not_found(candidate))
            }
            ProbeOutcome::Unexpected(reason) => Err(ValidationError::other(candidate, reason)),
        }
    }
}
