use anyhow::{Context, Result};
use arboard::Clipboard;

/// Trait for clipboard operations (allows mocking in tests)
trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Real clipboard implementation using arboard
struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")?;
        Ok(())
    }
}

/// Internal function for clipboard operations with dependency injection (test use)
#[cfg(test)]
fn copy_with_provider(url: &str, provider: &mut dyn ClipboardProvider) -> Result<()> {
    if url.is_empty() {
        anyhow::bail!("Resource has no URL to copy");
    }
    provider.set_text(url)?;
    Ok(())
}

/// Copy a resource URL to the system clipboard.
///
/// # Errors
/// Returns error if:
/// - The URL is empty (catalog entries may omit one)
/// - Clipboard access is denied (permissions)
/// - System clipboard is unavailable (headless environment)
pub fn copy_url(url: &str) -> Result<()> {
    if url.is_empty() {
        anyhow::bail!("Resource has no URL to copy");
    }

    let mut clipboard = SystemClipboard::new()?;
    clipboard.set_text(url)?;
    Ok(())
}
