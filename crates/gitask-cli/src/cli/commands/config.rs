//! `gitask config` – show config location and effective values.

use anyhow::Result;
use gitask_core::config::{self, GitaskConfig};

pub fn run_config(cfg: &GitaskConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", cfg.to_toml()?);
    Ok(())
}
