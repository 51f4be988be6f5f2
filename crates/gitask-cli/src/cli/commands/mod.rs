//! CLI command handlers. Each command is in its own file.

mod ask;
mod check;
mod config;
mod translate;

pub use ask::run_ask;
pub use check::run_check;
pub use config::run_config;
pub use translate::run_translate;
