//! `gitask translate <url>` – print the HTTPS equivalent of a remote.

use anyhow::{anyhow, Result};
use gitask_core::git_url::parse_git_url;

pub fn run_translate(url: &str) -> Result<()> {
    println!("{}", translate(url)?);
    Ok(())
}

pub(super) fn translate(url: &str) -> Result<String> {
    let parsed = parse_git_url(url)?;
    parsed
        .to_https()
        .ok_or_else(|| anyhow!("{} remotes have no HTTPS equivalent", parsed.transport))
}
