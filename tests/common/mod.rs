#![allow(dead_code)]

use serde_json::json;
use std::sync::Arc;
use url_shortener_client::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Address nothing listens on.
pub const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:1";

pub fn create_test_gateway(base_url: &str) -> HttpShortenGateway {
    HttpShortenGateway::new(base_url).unwrap()
}

pub fn create_test_form(
    base_url: &str,
) -> (
    ShortenerForm<HttpShortenGateway, MemoryClipboard>,
    Arc<MemoryClipboard>,
) {
    let clipboard = Arc::new(MemoryClipboard::new());
    let form = ShortenerForm::new(
        Arc::new(create_test_gateway(base_url)),
        clipboard.clone(),
        UrlValidation::Heuristic,
    );
    (form, clipboard)
}

/// Mounts a `/shorten` endpoint that always answers with `short_url`.
pub async fn mount_shorten_success(server: &MockServer, short_url: &str) {
    Mock::given(method("POST"))
        .and(path("/shorten"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "shortUrl": short_url })))
        .mount(server)
        .await;
}

/// Mounts a `/shorten` endpoint that always answers with `status`.
pub async fn mount_shorten_status(server: &MockServer, status: u16) {
    Mock::given(method("POST"))
        .and(path("/shorten"))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
