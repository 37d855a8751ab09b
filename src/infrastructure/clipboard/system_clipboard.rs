//! Platform clipboard backed by `arboard`.

use crate::domain::gateways::ClipboardWriter;
use crate::error::ClipboardError;
use async_trait::async_trait;

/// Writes to the operating system clipboard.
///
/// A fresh `arboard::Clipboard` is opened for every write on a blocking
/// thread, so no platform handle is held between copies. On X11 the text
/// stays available only while the process that set it is alive.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }

    /// Whether a clipboard backend can be opened in this environment.
    pub fn is_available() -> bool {
        arboard::Clipboard::new().is_ok()
    }
}

#[async_trait]
impl ClipboardWriter for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_owned();
        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            clipboard
                .set_text(text)
                .map_err(|e| ClipboardError::Write(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::Write(format!("clipboard task failed: {e}")))?
    }
}
