use super::Clipboard;

/// System clipboard backed by `arboard`. A fresh handle is opened per
/// write; on X11 the handle must outlive the paste, but a one-shot write
/// of a short string is within what arboard guarantees on all supported
/// platforms.
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        SystemClipboard
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    type Error = arboard::Error;

    async fn write_text(&self, text: &str) -> Result<(), Self::Error> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text.to_owned())
    }
}
