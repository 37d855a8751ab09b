//! Wire format of the shortening service.

use serde::{Deserialize, Serialize};

/// Body of `POST /shorten`.
#[derive(Debug, Serialize)]
pub struct ShortenRequest<'a> {
    pub url: &'a str,
}

/// Successful response. Extra fields are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,
}

/// Error body the service sends with 4xx/5xx, e.g. `{"error": "Invalid URL"}`.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
