//! `gitask check <url>` – validate once without prompting.

use anyhow::{bail, Result};
use gitask_core::config::GitaskConfig;
use gitask_core::prompt::message_for;
use gitask_core::validator::{GitRemoteValidator, ValidationResult, Validator};

pub async fn run_check(cfg: &GitaskConfig, url: &str, probe: bool) -> Result<()> {
    let mut validator = GitRemoteValidator::from_config(cfg);
    if !probe {
        validator = validator.without_probe();
    }

    let result = validator.validate(url).await;
    println!("{}", report(&result));
    status(&result)
}

/// Exit status for a check. The reason was already printed by `report`.
pub(super) fn status(result: &ValidationResult) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(err) => bail!("{} rejected", err.url()),
    }
}

/// User-facing summary of a check.
pub(super) fn report(result: &ValidationResult) -> String {
    match result {
        Ok(()) => "ok".to_string(),
        Err(err) => match err.suggestion() {
            Some(translated) => format!("{} Try \"{}\".", message_for(err.kind()), translated),
            None => message_for(err.kind()).to_string(),
        },
    }
}
