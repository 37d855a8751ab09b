//! Request and response bodies exchanged with the shortening service.

pub mod shorten;

pub use shorten::{ErrorResponse, ShortenRequest, ShortenResponse};
