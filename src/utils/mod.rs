//! Shared helpers.
//!
//! - [`url_validation`] - client-side URL acceptance policies

pub mod url_validation;
