//! HTTP implementation of [`ShortenGateway`].

use crate::domain::gateways::ShortenGateway;
use crate::dto::{ErrorResponse, ShortenRequest, ShortenResponse};
use crate::error::ShortenError;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Calls `POST {base_url}/shorten` with a JSON body.
///
/// Any 2xx status is success. Uses the client's default timeouts; no retries.
#[derive(Debug, Clone)]
pub struct HttpShortenGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpShortenGateway {
    /// Creates a gateway for the service at `base_url`.
    ///
    /// A trailing `/` on `base_url` is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::Transport`] if the HTTP client cannot be built
    /// (e.g. TLS backend initialization failure).
    pub fn new(base_url: &str) -> Result<Self, ShortenError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ShortenError::transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self::with_client(client, base_url))
    }

    /// Creates a gateway around an existing client.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/shorten", base_url.trim_end_matches('/')),
        }
    }

    /// Full URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ShortenGateway for HttpShortenGateway {
    async fn shorten(&self, url: &str) -> Result<String, ShortenError> {
        let body = serde_json::to_vec(&ShortenRequest { url }).map_err(|e| {
            ShortenError::transport(format!("failed to encode request body: {e}"))
        })?;

        debug!(endpoint = %self.endpoint, "Sending shorten request");

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();

        // The status must survive an unreadable error body.
        if !status.is_success() {
            let detail = response
                .bytes()
                .await
                .ok()
                .and_then(|bytes| serde_json::from_slice::<ErrorResponse>(&bytes).ok())
                .map(|e| e.error);
            return Err(ShortenError::status(status.as_u16(), detail));
        }

        let bytes = response.bytes().await?;
        let parsed: ShortenResponse =
            serde_json::from_slice(&bytes).map_err(|e| ShortenError::decode(e.to_string()))?;

        Ok(parsed.short_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_url() {
        let gateway = HttpShortenGateway::with_client(reqwest::Client::new(), "https://s.ly");
        assert_eq!(gateway.endpoint(), "https://s.ly/shorten");
    }

    #[test]
    fn test_endpoint_ignores_trailing_slash() {
        let gateway =
            HttpShortenGateway::with_client(reqwest::Client::new(), "http://localhost:8080/");
        assert_eq!(gateway.endpoint(), "http://localhost:8080/shorten");
    }

    #[test]
    fn test_endpoint_keeps_base_path() {
        let gateway =
            HttpShortenGateway::with_client(reqwest::Client::new(), "https://api.example.com/v1");
        assert_eq!(gateway.endpoint(), "https://api.example.com/v1/shorten");
    }
}
