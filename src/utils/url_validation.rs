//! Client-side URL acceptance checks.
//!
//! The default policy is a permissive heuristic: it decides whether input is
//! worth sending to the shortening service, not whether it is a valid URL.
//! It rejects ports, userinfo, uppercase hosts and non-http schemes, and it
//! accepts some strings that are not URLs at all. [`UrlValidation::Strict`]
//! delegates to the `url` crate instead.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use url::Url;

/// `[http(s)://]host.tld[/path][?query]`
///
/// Character classes are spelled out so matching stays ASCII-only.
static HEURISTIC_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?([0-9a-z.-]+)\.([a-z.]{2,6})([/0-9A-Za-z_ .-]*)*/?(\?\S*)?$")
        .expect("heuristic URL pattern is valid")
});

/// How strictly input is checked before it is sent to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UrlValidation {
    /// Permissive `host.tld` pattern with optional scheme, path and query.
    #[default]
    Heuristic,
    /// Must parse as an absolute `http`/`https` URL with a host.
    Strict,
}

impl UrlValidation {
    /// Returns whether `input` passes this policy. Input is not trimmed.
    pub fn accepts(self, input: &str) -> bool {
        match self {
            Self::Heuristic => HEURISTIC_URL_REGEX.is_match(input),
            Self::Strict => is_http_url(input),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Heuristic => "heuristic",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for UrlValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UrlValidation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "heuristic" => Ok(Self::Heuristic),
            "strict" => Ok(Self::Strict),
            other => Err(format!(
                "unknown URL validation policy '{other}' (expected 'heuristic' or 'strict')"
            )),
        }
    }
}

fn is_http_url(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}
