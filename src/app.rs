//! Runtime setup: logging and form construction from [`Config`].

use crate::config::Config;
use crate::domain::ShortenerForm;
use crate::infrastructure::clipboard::SystemClipboard;
use crate::infrastructure::http::HttpShortenGateway;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// The form wired to the real service and the system clipboard.
pub type AppForm = ShortenerForm<HttpShortenGateway, SystemClipboard>;

/// Installs the global tracing subscriber.
///
/// Logs go to stderr so stdout carries only the rendered form. An invalid
/// `RUST_LOG` filter falls back to `warn`.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

/// Builds the form for the configured service.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be created.
pub fn build_form(config: &Config) -> Result<AppForm> {
    let gateway = HttpShortenGateway::new(&config.api_base_url)
        .context("Failed to initialize shortening service client")?;
    tracing::debug!(endpoint = %gateway.endpoint(), "Shortening service client ready");

    if !SystemClipboard::is_available() {
        tracing::warn!("System clipboard is unavailable; copy will fail");
    }

    Ok(ShortenerForm::new(
        Arc::new(gateway),
        Arc::new(SystemClipboard::new()),
        config.url_validation,
    ))
}
