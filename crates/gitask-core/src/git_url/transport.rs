//! Git transports as named by URL schemes.

use std::fmt;

/// Transport used to reach a git remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transport {
    Https,
    Http,
    Ssh,
    Git,
    File,
    Other(String),
}

impl Transport {
    /// Map a URL scheme (already lowercased by the `url` crate) to a transport.
    pub fn from_scheme(scheme: &str) -> Self {
        match scheme {
            "https" => Transport::Https,
            "http" => Transport::Http,
            "ssh" | "git+ssh" | "ssh+git" => Transport::Ssh,
            "git" => Transport::Git,
            "file" => Transport::File,
            other => Transport::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Transport::Https => "https",
            Transport::Http => "http",
            Transport::Ssh => "ssh",
            Transport::Git => "git",
            Transport::File => "file",
            Transport::Other(s) => s,
        }
    }

    /// True for transports that speak git smart-HTTP.
    pub fn is_http(&self) -> bool {
        matches!(self, Transport::Https | Transport::Http)
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
