//! Outcome of a submit, as shown in the result area.

/// Shown in the result area before anything has been submitted.
pub const PLACEHOLDER_TEXT: &str = "Your short URL will appear here";

/// Shown when input fails client-side validation.
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL.";

/// Shown for every service-side failure, whatever the cause.
pub const SERVICE_FAILURE_MESSAGE: &str = "Failed to shorten URL. Please try again.";

/// Why a submit did not produce a short URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Input was rejected before any request was made.
    InvalidUrl,
    /// Non-success status, transport error or malformed response.
    ServiceUnavailable,
}

impl FailureKind {
    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidUrl => INVALID_URL_MESSAGE,
            Self::ServiceUnavailable => SERVICE_FAILURE_MESSAGE,
        }
    }
}

/// Result of one submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortenResult {
    /// The short URL exactly as returned by the service.
    Shortened(String),
    Failed(FailureKind),
}

impl ShortenResult {
    /// Text for the result area. This is also what gets copied.
    pub fn text(&self) -> &str {
        match self {
            Self::Shortened(short_url) => short_url,
            Self::Failed(kind) => kind.message(),
        }
    }

    pub fn is_shortened(&self) -> bool {
        matches!(self, Self::Shortened(_))
    }

    pub fn short_url(&self) -> Option<&str> {
        match self {
            Self::Shortened(short_url) => Some(short_url),
            Self::Failed(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_per_variant() {
        assert_eq!(
            ShortenResult::Shortened("http://s.ly/abc".to_string()).text(),
            "http://s.ly/abc"
        );
        assert_eq!(
            ShortenResult::Failed(FailureKind::InvalidUrl).text(),
            "Please enter a valid URL."
        );
        assert_eq!(
            ShortenResult::Failed(FailureKind::ServiceUnavailable).text(),
            "Failed to shorten URL. Please try again."
        );
    }

    #[test]
    fn test_short_url_only_for_success() {
        let ok = ShortenResult::Shortened("http://s.ly/abc".to_string());
        assert!(ok.is_shortened());
        assert_eq!(ok.short_url(), Some("http://s.ly/abc"));

        let failed = ShortenResult::Failed(FailureKind::ServiceUnavailable);
        assert!(!failed.is_shortened());
        assert_eq!(failed.short_url(), None);
    }
}
