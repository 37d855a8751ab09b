//! Error types for the shortening gateway and the clipboard.
//!
//! None of these reach the user directly. The form collapses every
//! [`ShortenError`] into a single user-facing failure and logs the cause;
//! [`ClipboardError`] is logged and otherwise ignored.

use thiserror::Error;

/// Failure reported by a [`crate::domain::gateways::ShortenGateway`].
#[derive(Debug, Error)]
pub enum ShortenError {
    /// The service answered with a non-success HTTP status.
    ///
    /// `detail` carries the service's own `error` message when the body had one.
    #[error("shortening service responded with HTTP {status}")]
    Status { status: u16, detail: Option<String> },

    /// The request never produced a response (DNS, connect, TLS, reset).
    #[error("request to shortening service failed: {0}")]
    Transport(String),

    /// The response was not JSON with a string `shortUrl` field.
    #[error("malformed response from shortening service: {0}")]
    Decode(String),
}

impl ShortenError {
    pub fn status(status: u16, detail: Option<String>) -> Self {
        Self::Status { status, detail }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }
}

impl From<reqwest::Error> for ShortenError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

/// Failure reported by a [`crate::domain::gateways::ClipboardWriter`].
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("clipboard write failed: {0}")]
    Write(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_omits_detail() {
        let err = ShortenError::status(400, Some("Invalid URL".to_string()));
        assert_eq!(
            err.to_string(),
            "shortening service responded with HTTP 400"
        );
    }

    #[test]
    fn test_constructors() {
        assert!(matches!(
            ShortenError::transport("connection refused"),
            ShortenError::Transport(m) if m == "connection refused"
        ));
        assert!(matches!(
            ShortenError::decode("expected value"),
            ShortenError::Decode(_)
        ));
    }
}
