//! Raw terminal mode for keystroke-level input.

use anyhow::{Context, Result};
use crossterm::terminal;
use crossterm::tty::IsTty;

/// Keeps the terminal in raw mode until dropped.
///
/// Does nothing when stdin is not a terminal (piped input), so scripted
/// sessions still work line by line.
pub struct RawModeGuard {
    enabled: bool,
}

impl RawModeGuard {
    pub fn enable_if_tty() -> Result<Self> {
        if !std::io::stdin().is_tty() {
            tracing::debug!("stdin is not a terminal; leaving line discipline alone");
            return Ok(Self { enabled: false });
        }
        terminal::enable_raw_mode().context("failed to enable raw terminal mode")?;
        Ok(Self { enabled: true })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.enabled {
            if let Err(e) = terminal::disable_raw_mode() {
                tracing::warn!("failed to restore terminal mode: {}", e);
            }
        }
    }
}
