//! Domain layer: the shortener form and the traits it depends on.
//!
//! # Architecture
//!
//! - [`form`] - [`form::ShortenerForm`], the only stateful component
//! - [`result`] - tagged outcome of a submit and its user-facing messages
//! - [`view`] - render-ready snapshot of the form
//! - [`gateways`] - traits for the shortening service and the clipboard
//!
//! The domain layer has no dependency on HTTP or on any clipboard backend;
//! implementations live in [`crate::infrastructure`].
//!
//! # Submit Flow
//!
//! 1. Front end mirrors keystrokes with [`form::ShortenerForm::set_input`]
//! 2. [`form::ShortenerForm::submit`] validates the input
//! 3. Valid input goes to [`gateways::ShortenGateway::shorten`]
//! 4. The newest submit's outcome becomes the displayed [`result::ShortenResult`]

pub mod form;
pub mod gateways;
pub mod result;
pub mod view;

pub use form::{COPIED_FEEDBACK, ShortenerForm};
pub use result::{FailureKind, ShortenResult};
pub use view::{CopyIcon, FormView, ResultKind};
