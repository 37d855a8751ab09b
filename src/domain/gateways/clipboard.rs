//! Clipboard trait.

use crate::error::ClipboardError;
use async_trait::async_trait;

/// Plain-text sink for the copy action.
///
/// # Implementations
///
/// - [`crate::infrastructure::clipboard::SystemClipboard`] - platform clipboard
/// - [`crate::infrastructure::clipboard::MemoryClipboard`] - in-process buffer
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClipboardWriter: Send + Sync {
    /// Replaces the clipboard contents with `text`.
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
