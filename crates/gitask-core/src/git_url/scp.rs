//! scp-like remote syntax: `[user@]host:path`.

/// Components of an scp-like remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScpLike<'a> {
    pub user: Option<&'a str>,
    pub host: &'a str,
    pub path: &'a str,
}

/// Splits `git@github.com:owner/repo.git` style input.
///
/// Returns `None` when the input is not scp-like: no `:`, a `/` before the
/// first `:`, or an empty host or path. Input containing `://` is never
/// scp-like; callers check for a scheme first.
pub fn split_scp_like(input: &str) -> Option<ScpLike<'_>> {
    let colon = input.find(':')?;
    if let Some(slash) = input.find('/') {
        if slash < colon {
            return None;
        }
    }
    let (authority, path) = (&input[..colon], &input[colon + 1..]);
    let (user, host) = match authority.rsplit_once('@') {
        Some((user, host)) => (Some(user).filter(|u| !u.is_empty()), host),
        None => (None, authority),
    };
    if host.is_empty() || path.is_empty() {
        return None;
    }
    Some(ScpLike { user, host, path })
}
