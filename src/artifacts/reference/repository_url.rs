use crate::artifacts::reference::{SUPPORTED_SCHEMES, VCS_PREFIX};
use crate::error::{ReferenceError, Result};

/// Remote location of a git repository.
///
/// Stored without the `git+` prefix pip wants; the prefix is added back when
/// an install target or dependency entry is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryUrl(String);

impl RepositoryUrl {
    pub fn try_parse(url: &str) -> Result<Self> {
        let url = url.strip_prefix(VCS_PREFIX).unwrap_or(url);

        if url.is_empty() {
            return Err(ReferenceError::EmptyUrl);
        }

        let invalid = |reason: &str| ReferenceError::InvalidUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        };

        if url.chars().any(char::is_whitespace) {
            return Err(invalid("must not contain whitespace"));
        }
        if url.contains('#') {
            return Err(invalid("must not contain a '#' fragment"));
        }

        let Some((scheme, rest)) = url.split_once("://") else {
            if is_scp_like(url) {
                return Err(invalid(
                    "scp-style addresses are not supported, use ssh://user@host/path",
                ));
            }
            return Err(invalid("missing scheme (expected https://, ssh://, ...)"));
        };

        let scheme = scheme.to_ascii_lowercase();
        if !SUPPORTED_SCHEMES.contains(&scheme.as_str()) {
            return Err(invalid(&format!("unsupported scheme '{scheme}'")));
        }

        let (host, path) = rest.split_at(rest.find('/').unwrap_or(rest.len()));
        if host.is_empty() && scheme != "file" {
            return Err(invalid("missing host"));
        }
        if path.trim_matches('/').is_empty() {
            return Err(invalid("missing repository path"));
        }
        if path.contains('@') {
            return Err(invalid("the ref belongs after the url, as <url>@<ref>"));
        }

        Ok(Self(url.to_string()))
    }

    /// The URL as pip expects it inside a requirement (`git+<url>`).
    pub fn vcs_url(&self) -> String {
        format!("{VCS_PREFIX}{}", self.0)
    }
}

impl AsRef<str> for RepositoryUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RepositoryUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Splits `<url>@<ref>` at the last `@` of the URL path.
///
/// Anything before the path (such as the `git@` user of an ssh URL) is never
/// taken as a ref separator, while refs themselves may contain `/`. The
/// `git+` prefix is dropped from the returned URL.
pub fn split_ref(target: &str) -> (&str, Option<&str>) {
    let body = target.strip_prefix(VCS_PREFIX).unwrap_or(target);

    let Some(scheme_end) = body.find("://").map(|i| i + 3) else {
        return (body, None);
    };
    let path_start = body[scheme_end..]
        .find('/')
        .map_or(body.len(), |i| scheme_end + i);

    match body[path_start..].rfind('@') {
        Some(at) => {
            let at = path_start + at;
            (&body[..at], Some(&body[at + 1..]))
        }
        None => (body, None),
    }
}

fn is_scp_like(url: &str) -> bool {
    match (url.find('@'), url.find(':')) {
        (Some(at), Some(colon)) => at < colon,
        _ => false,
    }
}
