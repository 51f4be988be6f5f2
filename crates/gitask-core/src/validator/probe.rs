//! Smart-HTTP discovery probe.
//!
//! Uses the curl crate (libcurl) to request `info/refs?service=git-upload-pack`,
//! the first request any git client makes against an HTTP remote. Only the
//! status code matters; the ref advertisement body is discarded.

use std::time::Duration;

use crate::config::ProbeConfig;

const USER_AGENT: &str = concat!("git/2.0 (gitask/", env!("CARGO_PKG_VERSION"), ")");

/// Result of probing a remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Server answered the discovery request with 2xx.
    Found,
    /// Server says the repository does not exist or is not readable.
    Missing(u32),
    /// Host could not be resolved or reached in time.
    Unreachable(String),
    /// Any other status or transfer failure.
    Unexpected(String),
}

/// Discovery URL for a repository base URL.
pub fn discovery_url(base: &str) -> String {
    format!(
        "{}/info/refs?service=git-upload-pack",
        base.trim_end_matches('/')
    )
}

/// Classify the final HTTP status of a discovery request.
pub fn classify_status(code: u32) -> ProbeOutcome {
    match code {
        200..=299 => ProbeOutcome::Found,
        // Hosts such as GitHub answer 401 for both private and missing repos.
        401 | 403 | 404 | 410 => ProbeOutcome::Missing(code),
        _ => ProbeOutcome::Unexpected(format!("HTTP {}", code)),
    }
}

fn classify_curl_error(e: &curl::Error) -> ProbeOutcome {
    if e.is_operation_timedout()
        || e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
    {
        return ProbeOutcome::Unreachable(e.to_string());
    }
    ProbeOutcome::Unexpected(e.to_string())
}

/// Performs the discovery request for `base`.
///
/// Follows redirects. Runs in the current thread; call from `spawn_blocking`
/// if used from async code.
pub fn probe_repository(base: &str, settings: &ProbeConfig) -> ProbeOutcome {
    let target = discovery_url(base);
    match perform(&target, settings.connect_timeout(), settings.timeout()) {
        Ok(code) => {
            tracing::debug!("probe {} returned HTTP {}", target, code);
            classify_status(code)
        }
        Err(e) => {
            tracing::debug!("probe {} failed: {}", target, e);
            classify_curl_error(&e)
        }
    }
}

fn perform(target: &str, connect_timeout: Duration, timeout: Duration) -> Result<u32, curl::Error> {
    let mut easy = curl::easy::Easy::new();
    easy.url(target)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.useragent(USER_AGENT)?;
    easy.connect_timeout(connect_timeout)?;
    easy.timeout(timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| Ok(data.len()))?;
        transfer.perform()?;
    }

    easy.response_code()
}
