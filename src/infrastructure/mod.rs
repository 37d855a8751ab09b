//! Infrastructure layer for external integrations.
//!
//! This layer implements the traits defined in [`crate::domain::gateways`].
//!
//! # Modules
//!
//! - [`http`] - Shortening service client (reqwest)
//! - [`clipboard`] - System clipboard (arboard) and in-memory implementations

pub mod clipboard;
pub mod http;
