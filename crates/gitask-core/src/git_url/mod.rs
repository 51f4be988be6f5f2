//! Git remote URL model.
//!
//! Parses the remote forms git accepts (`scheme://` URLs and scp-like
//! `user@host:path`) into a [`GitUrl`] and derives the HTTPS equivalent used
//! when suggesting a replacement for an unsupported transport.

mod error;
mod scp;
mod transport;

pub use error::GitUrlError;
pub use scp::{split_scp_like, ScpLike};
pub use transport::Transport;

use url::Url;

/// A syntactically valid git remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitUrl {
    pub transport: Transport,
    pub user: Option<String>,
    /// Host name; `None` only for `file` remotes.
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Repository path without the leading `/`.
    pub path: String,
    /// The input exactly as given.
    pub raw: String,
}

impl GitUrl {
    /// HTTPS equivalent of this remote, if one can be derived.
    ///
    /// - `git@github.com:x/y.git` → `https://github.com/x/y.git`
    /// - `ssh://git@github.com:22/x/y.git` → `https://github.com/x/y.git`
    /// - `http://host/x.git` → `https://host/x.git`
    ///
    /// `file` remotes and unknown schemes have no translation. Ports of
    /// ssh and git remotes are dropped since they do not apply to HTTPS.
    pub fn to_https(&self) -> Option<String> {
        match &self.transport {
            Transport::Https => Some(self.raw.clone()),
            Transport::Http => self
                .raw
                .get("http://".len()..)
                .map(|rest| format!("https://{rest}")),
            Transport::Ssh | Transport::Git => {
                let host = self.host.as_deref()?;
                Some(format!("https://{}/{}", host, self.path))
            }
            Transport::File | Transport::Other(_) => None,
        }
    }
}

/// Parses a git remote.
///
/// Input is taken as-is; surrounding whitespace is an error rather than
/// being trimmed, so the accepted URL is always exactly what was typed.
pub fn parse_git_url(input: &str) -> Result<GitUrl, GitUrlError> {
    if input.trim().is_empty() {
        return Err(GitUrlError::Empty);
    }
    if input.chars().any(char::is_whitespace) {
        return Err(GitUrlError::ContainsWhitespace);
    }

    if input.contains("://") {
        return parse_with_scheme(input);
    }

    let scp = split_scp_like(input).ok_or(GitUrlError::MissingScheme)?;
    Ok(GitUrl {
        transport: Transport::Ssh,
        user: scp.user.map(str::to_string),
        host: Some(scp.host.to_string()),
        port: None,
        path: scp.path.trim_start_matches('/').to_string(),
        raw: input.to_string(),
    })
}

fn parse_with_scheme(input: &str) -> Result<GitUrl, GitUrlError> {
    let url = Url::parse(input).map_err(|e| GitUrlError::Malformed(e.to_string()))?;
    let transport = Transport::from_scheme(url.scheme());

    let host = url
        .host_str()
        .filter(|h| !h.is_empty())
        .map(str::to_string);
    if host.is_none() && transport != Transport::File {
        return Err(GitUrlError::MissingHost);
    }

    let path = url.path().trim_start_matches('/').to_string();
    if path.is_empty() {
        return Err(GitUrlError::MissingPath);
    }
    // The discovery request appends its own query to the repository path.
    if url.query().is_some() || url.fragment().is_some() {
        return Err(GitUrlError::QueryOrFragment);
    }

    let user = Some(url.username())
        .filter(|u| !u.is_empty())
        .map(str::to_string);

    Ok(GitUrl {
        transport,
        user,
        host,
        port: url.port(),
        path,
        raw: input.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_https_remote() {
        let u = parse_git_url("https://github.com/x/y.git").unwrap();
        assert_eq!(u.transport, Transport::Https);
        assert_eq!(u.host.as_deref(), Some("github.com"));
        assert_eq!(u.path, "x/y.git");
        assert_eq!(u.to_https().as_deref(), Some("https://github.com/x/y.git"));
    }

    #[test]
    fn parses_scp_like_as_ssh() {
        let u = parse_git_url("git@github.com:x/y.git").unwrap();
        assert_eq!(u.transport, Transport::Ssh);
        assert_eq!(u.user.as_deref(), Some("git"));
        assert_eq!(u.to_https().as_deref(), Some("https://github.com/x/y.git"));
    }

    #[test]
    fn ssh_url_drops_port_in_translation() {
        let u = parse_git_url("ssh://git@github.com:2222/x/y.git").unwrap();
        assert_eq!(u.transport, Transport::Ssh);
        assert_eq!(u.port, Some(2222));
        assert_eq!(u.to_https().as_deref(), Some("https://github.com/x/y.git"));
    }

    #[test]
    fn git_protocol_translates() {
        let u = parse_git_url("git://example.org/repo.git").unwrap();
        assert_eq!(u.transport, Transport::Git);
        assert_eq!(u.to_https().as_deref(), Some("https://example.org/repo.git"));
    }

    #[test]
    fn http_translates_to_https() {
        let u = parse_git_url("http://example.org:8080/repo.git").unwrap();
        assert_eq!(u.transport, Transport::Http);
        assert_eq!(
            u.to_https().as_deref(),
            Some("https://example.org:8080/repo.git")
        );
    }

    #[test]
    fn file_and_unknown_schemes_have_no_translation() {
        let f = parse_git_url("file:///srv/git/repo.git").unwrap();
        assert_eq!(f.transport, Transport::File);
        assert!(f.host.is_none());
        assert!(f.to_https().is_none());

        let o = parse_git_url("ftp://example.org/repo.git").unwrap();
        assert_eq!(o.transport, Transport::Other("ftp".to_string()));
        assert!(o.to_https().is_none());
    }

    #[test]
    fn rejects_blank_and_whitespace() {
        assert_eq!(parse_git_url(""), Err(GitUrlError::Empty));
        assert_eq!(parse_git_url(" "), Err(GitUrlError::Empty));
        assert_eq!(
            parse_git_url("https://github.com/x/ y.git"),
            Err(GitUrlError::ContainsWhitespace)
        );
        assert_eq!(
            parse_git_url(" https://github.com/x/y.git"),
            Err(GitUrlError::ContainsWhitespace)
        );
    }

    #[test]
    fn rejects_bare_words_and_missing_parts() {
        assert_eq!(parse_git_url("github"), Err(GitUrlError::MissingScheme));
        assert_eq!(
            parse_git_url("github.com/x/y.git"),
            Err(GitUrlError::MissingScheme)
        );
        assert_eq!(
            parse_git_url("https://github.com"),
            Err(GitUrlError::MissingPath)
        );
        assert_eq!(
            parse_git_url("https://github.com/"),
            Err(GitUrlError::MissingPath)
        );
        assert!(matches!(
            parse_git_url("https://exa mple"),
            Err(GitUrlError::ContainsWhitespace)
        ));
        assert!(matches!(
            parse_git_url("https://[::1/x"),
            Err(GitUrlError::Malformed(_))
        ));
    }

    #[test]
    fn rejects_query_and_fragment() {
        for input in [
            "https://github.com/x/y.git#main",
            "https://github.com/x/y.git?ref=main",
            "https://github.com/x/y.git?",
            "ssh://git@github.com/x/y.git#main",
        ] {
            assert_eq!(
                parse_git_url(input),
                Err(GitUrlError::QueryOrFragment),
                "{input}"
            );
        }
    }
}
