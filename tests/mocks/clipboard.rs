use std::sync::{Arc, Mutex};

use feed_clip::Clipboard;

#[derive(Clone)]
pub struct MockClipboard {
    pub writes: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl Default for MockClipboard {
    fn default() -> Self {
        Self {
            writes: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }
}

impl MockClipboard {
    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Default::default()
        }
    }
}

impl Clipboard for MockClipboard {
    type Error = anyhow::Error;

    async fn write_text(&self, text: &str) -> anyhow::Result<()> {
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
