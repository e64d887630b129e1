//! Clipboard integration.

use arboard::Clipboard;

use crate::error::Result;
use crate::model::{summarize, FilterModel};

/// Copy text to clipboard.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

/// Copy a model's coefficients and roots to the clipboard.
pub fn copy_model_summary<M: FilterModel + ?Sized>(model: &M) -> Result<()> {
    let mut text = String::from("Pole Zero Model\n");
    text.push_str(&"=".repeat(40));
    text.push('\n');
    text.push_str(&summarize(model));
    copy_to_clipboard(&text)
}
