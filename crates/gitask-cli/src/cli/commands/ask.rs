//! `gitask ask` – interactive prompt.

use anyhow::{Context, Result};
use gitask_core::config::GitaskConfig;
use gitask_core::prompt::Prompt;
use gitask_core::validator::GitRemoteValidator;

use crate::cli::terminal::RawModeGuard;

pub async fn run_ask(cfg: &GitaskConfig, question: Option<&str>, probe: bool) -> Result<()> {
    let mut validator = GitRemoteValidator::from_config(cfg);
    if !probe {
        validator = validator.without_probe();
    }
    let question = question.unwrap_or(&cfg.question);

    let answer = {
        let _raw = RawModeGuard::enable_if_tty()?;
        let mut prompt = Prompt::new(validator, tokio::io::stdin(), tokio::io::stdout())
            .with_options(cfg.prompt_options());
        prompt.ask(question).await
    };

    let url = answer.context("no repository URL accepted")?;
    println!("{url}");
    Ok(())
}
