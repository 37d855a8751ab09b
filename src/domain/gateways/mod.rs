//! Traits for the form's external collaborators.
//!
//! The form depends only on these traits. Concrete implementations live in
//! `crate::infrastructure`; mocks are generated by `mockall` under `cfg(test)`.

pub mod clipboard;
pub mod shorten_gateway;

pub use clipboard::ClipboardWriter;
pub use shorten_gateway::ShortenGateway;

#[cfg(test)]
pub use clipboard::MockClipboardWriter;
#[cfg(test)]
pub use shorten_gateway::MockShortenGateway;
