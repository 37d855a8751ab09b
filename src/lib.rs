//! # URL Shortener Client
//!
//! A terminal client for a remote URL shortening service: enter a URL, get a
//! short one back, copy it to the clipboard.
//!
//! ## Architecture
//!
//! The crate follows the same layering as the service it talks to:
//!
//! - **Domain Layer** ([`domain`]) - The shortener form, its result type and collaborator traits
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP gateway and clipboard backends
//! - **Wire Format** ([`dto`]) - JSON bodies of `POST /shorten`
//! - **Presentation** ([`ui`]) - Terminal rendering
//!
//! ## Behavior
//!
//! - Input is checked client-side before any request is made
//! - Exactly one request per submit; no retries, no caching
//! - Only the most recently started submit may update the displayed result
//! - Copy confirmation lasts one second after the latest copy
//!
//! ## Quick Start
//!
//! ```bash
//! export SHORTENER_API_URL="https://sho.rt"
//!
//! # One-shot
//! cargo run -- url example.com --copy
//!
//! # Interactive
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod app;
pub mod config;
pub mod domain;
pub mod dto;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod utils;

pub use error::{ClipboardError, ShortenError};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::gateways::{ClipboardWriter, ShortenGateway};
    pub use crate::domain::{
        CopyIcon, FailureKind, FormView, ResultKind, ShortenResult, ShortenerForm,
    };
    pub use crate::error::{ClipboardError, ShortenError};
    pub use crate::infrastructure::clipboard::{MemoryClipboard, SystemClipboard};
    pub use crate::infrastructure::http::HttpShortenGateway;
    pub use crate::utils::url_validation::UrlValidation;
}
