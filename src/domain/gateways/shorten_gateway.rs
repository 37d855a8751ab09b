//! Gateway trait for the remote shortening service.

use crate::error::ShortenError;
use async_trait::async_trait;

/// Remote service that turns a long URL into a short one.
///
/// The service contract is opaque: one URL in, one short URL out. Callers
/// must not assume anything about the shape of the returned value.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpShortenGateway`] - JSON over HTTP
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortenGateway: Send + Sync {
    /// Asks the service to shorten `url`, passed through verbatim.
    ///
    /// Makes exactly one request. No retries.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::Status`] on a non-success response,
    /// [`ShortenError::Transport`] when no response arrived and
    /// [`ShortenError::Decode`] when the body is not the expected JSON.
    async fn shorten(&self, url: &str) -> Result<String, ShortenError>;
}
