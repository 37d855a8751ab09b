//! In-process clipboard for headless runs and tests.

use crate::domain::gateways::ClipboardWriter;
use crate::error::ClipboardError;
use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// Keeps the last written text in memory.
///
/// # Use Cases
///
/// - Environments without a display server (CI, SSH sessions)
/// - Integration tests that need to inspect what was copied
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        debug!("Using in-memory clipboard");
        Self::default()
    }

    /// The most recently written text.
    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ClipboardWriter for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        *self.contents.lock().unwrap_or_else(PoisonError::into_inner) = Some(text.to_owned());
        Ok(())
    }
}
