//! Clipboard implementations.

mod memory_clipboard;
mod system_clipboard;

pub use memory_clipboard::MemoryClipboard;
pub use system_clipboard::SystemClipboard;
