pub mod config;
pub mod logging;

pub mod git_url;
pub mod prompt;
pub mod validator;
