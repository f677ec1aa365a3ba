use arboard::Clipboard;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::io::{self, Write};
use thiserror::Error;

/// Clipboard failures; only ever logged
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard not available")]
    Unavailable,

    #[error("Clipboard error: {0}")]
    Platform(#[from] arboard::Error),

    #[error("Failed to write terminal clipboard sequence: {0}")]
    Terminal(#[from] io::Error),
}

/// How a copy reached the clipboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    /// System clipboard
    Platform,
    /// OSC 52 escape sequence handled by the terminal emulator
    Terminal,
}

/// Clipboard utilities for copy functionality in TUI
pub struct ClipboardManager {
    clipboard: Option<Clipboard>,
}

impl ClipboardManager {
    pub fn new() -> Self {
        let clipboard = match Clipboard::new() {
            Ok(cb) => {
                tracing::info!("Clipboard initialized successfully");
                Some(cb)
            }
            Err(e) => {
                tracing::warn!("Failed to initialize clipboard: {} - falling back to terminal copy", e);
                None
            }
        };
        Self { clipboard }
    }

    /// Manager that always uses the terminal fallback
    pub fn terminal_only() -> Self {
        Self { clipboard: None }
    }

    /// Copy text, logging instead of returning failures
    pub fn copy_to_clipboard(&mut self, text: &str) {
        let mut stdout = io::stdout();
        match self.copy_with_fallback(text, &mut stdout) {
            Ok(method) => tracing::debug!("Copied {} characters via {:?}", text.len(), method),
            Err(e) => tracing::error!("Failed to copy to clipboard: {}", e),
        }
    }

    /// Copy text with the platform clipboard, or write OSC 52 to `fallback`
    pub fn copy_with_fallback<W: Write>(
        &mut self,
        text: &str,
        fallback: &mut W,
    ) -> Result<CopyMethod, ClipboardError> {
        match self.copy(text) {
            Ok(()) => return Ok(CopyMethod::Platform),
            Err(ClipboardError::Unavailable) => {}
            Err(e) => tracing::warn!("Platform clipboard failed: {} - using terminal copy", e),
        }

        fallback.write_all(osc52_sequence(text).as_bytes())?;
        fallback.flush()?;
        Ok(CopyMethod::Terminal)
    }

    /// Copy text to the platform clipboard
    pub fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = self.clipboard.as_mut().ok_or(ClipboardError::Unavailable)?;
        clipboard.set_text(text)?;
        Ok(())
    }

    /// Check if the platform clipboard is available
    pub fn is_available(&self) -> bool {
        self.clipboard.is_some()
    }
}

impl Default for ClipboardManager {
    fn default() -> Self {
        Self::new()
    }
}

/// OSC 52 "set clipboard" sequence for `text`
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}
