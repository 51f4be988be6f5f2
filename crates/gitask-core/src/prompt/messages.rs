//! Feedback shown after a rejected URL.

use crate::validator::ErrorKind;

pub const INVALID_URL: &str = "Please type in a valid git repository URL.";
pub const NOT_FOUND: &str = "Couldn't locate git repository with the received URL.";
pub const UNSUPPORTED_TRANSPORT: &str = "Only HTTPS git repository URLs are supported.";
pub const CHECK_FAILED: &str = "Couldn't check the git repository URL. Please try again.";

pub fn message_for(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Parse => INVALID_URL,
        ErrorKind::NotFound => NOT_FOUND,
        ErrorKind::UnknownTransport => UNSUPPORTED_TRANSPORT,
        ErrorKind::Other => CHECK_FAILED,
    }
}
