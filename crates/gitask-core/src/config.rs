use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::prompt::PromptOptions;

/// Question shown when none is configured or passed on the command line.
pub const DEFAULT_QUESTION: &str = "What's your git repository URL?";

/// Reachability probe parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// If false, only syntax and transport are checked.
    pub enabled: bool,
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Total request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            connect_timeout_secs: 10,
            timeout_secs: 20,
        }
    }
}

impl ProbeConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Global configuration loaded from `~/.config/gitask/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitaskConfig {
    /// Question printed by `gitask ask` when `--question` is not given.
    pub question: String,
    /// Maximum number of characters accepted on one input line.
    pub max_input_len: usize,
    /// Validate a translated URL before offering it as a suggestion.
    pub verify_suggestion: bool,
    /// Keep a rejected line on screen for editing instead of clearing it.
    #[serde(default)]
    pub keep_rejected_input: bool,
    /// Accept plain `http://` remotes instead of suggesting `https://`.
    #[serde(default)]
    pub allow_http: bool,
    /// Optional probe section; if missing, built-in defaults are used.
    #[serde(default)]
    pub probe: Option<ProbeConfig>,
}

impl Default for GitaskConfig {
    fn default() -> Self {
        Self {
            question: DEFAULT_QUESTION.to_string(),
            max_input_len: 2048,
            verify_suggestion: true,
            keep_rejected_input: false,
            allow_http: false,
            probe: None,
        }
    }
}

impl GitaskConfig {
    /// Effective probe settings (configured section or defaults).
    pub fn probe(&self) -> ProbeConfig {
        self.probe.clone().unwrap_or_default()
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Prompt loop options derived from this config.
    pub fn prompt_options(&self) -> PromptOptions {
        PromptOptions {
            max_input_len: self.max_input_len,
            verify_suggestion: self.verify_suggestion,
            keep_rejected_input: self.keep_rejected_input,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gitask")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GitaskConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = GitaskConfig::default();
        let toml = default_cfg.to_toml()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<GitaskConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: GitaskConfig = toml::from_str(&data)
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = GitaskConfig::default();
        assert_eq!(cfg.question, DEFAULT_QUESTION);
        assert_eq!(cfg.max_input_len, 2048);
        assert!(cfg.verify_suggestion);
        assert!(!cfg.allow_http);
        assert!(cfg.probe.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = GitaskConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: GitaskConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.question, cfg.question);
        assert_eq!(parsed.max_input_len, cfg.max_input_len);
        assert_eq!(parsed.verify_suggestion, cfg.verify_suggestion);
    }

    #[test]
    fn config_toml_probe_section() {
        let toml = r#"
            question = "Repository?"
            max_input_len = 128
            verify_suggestion = false
            keep_rejected_input = true
            allow_http = true

            [probe]
            enabled = false
            connect_timeout_secs = 3
            timeout_secs = 7
        "#;
        let cfg: GitaskConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.question, "Repository?");
        assert!(cfg.allow_http);
        let probe = cfg.probe();
        assert!(!probe.enabled);
        assert_eq!(probe.connect_timeout(), Duration::from_secs(3));
        assert_eq!(probe.timeout(), Duration::from_secs(7));

        let opts = cfg.prompt_options();
        assert_eq!(opts.max_input_len, 128);
        assert!(!opts.verify_suggestion);
        assert!(opts.keep_rejected_input);
    }

    #[test]
    fn missing_probe_section_uses_defaults() {
        let toml = r#"
            question = "Repository?"
            max_input_len = 64
            verify_suggestion = true
        "#;
        let cfg: GitaskConfig = toml::from_str(toml).unwrap();
        assert!(!cfg.allow_http);
        assert!(!cfg.keep_rejected_input);
        let probe = cfg.probe();
        assert!(probe.enabled);
        assert_eq!(probe.timeout_secs, 20);
    }

    #[test]
    fn load_from_reports_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "max_input_len = \"lots\"").unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("invalid config"));
    }

    #[test]
    fn load_from_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = GitaskConfig {
            max_input_len: 10,
            ..GitaskConfig::default()
        };
        fs::write(&path, toml::to_string_pretty(&cfg).unwrap()).unwrap();
        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded.max_input_len, 10);
    }
}
