//! Clipboard functionality for copying calculator results.

use anyhow::{Context, Result};
use arboard::Clipboard;
use tracing::debug;

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;

    clipboard
        .set_text(text.to_string())
        .context("Failed to copy to clipboard")?;

    debug!(text, "copied result to clipboard");
    Ok(())
}
