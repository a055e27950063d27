use std::sync::{Arc, Mutex};

use feed_clip::{PageSnapshot, PageSource};

#[derive(Clone)]
pub struct MockPageSource {
    pub path: String,
    pub html: String,
    pub fail_with: Option<String>,
    pub calls: Arc<Mutex<u32>>,
}

impl MockPageSource {
    pub fn new(path: &str, html: &str) -> Self {
        Self {
            path: path.to_string(),
            html: html.to_string(),
            fail_with: None,
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn watch_fixture() -> Self {
        Self::new(
            "/watch?v=dQw4w9WgXcQ",
            include_str!("../fixtures/watch.html"),
        )
    }

    pub fn channel_fixture() -> Self {
        Self::new("/@RickAstleyYT", include_str!("../fixtures/channel.html"))
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            path: String::new(),
            html: String::new(),
            fail_with: Some(msg.to_string()),
            calls: Arc::new(Mutex::new(0)),
        }
    }
}

impl PageSource for MockPageSource {
    type Error = anyhow::Error;

    async fn snapshot(&self) -> anyhow::Result<PageSnapshot> {
        *self.calls.lock().unwrap() += 1;
        if let Some(ref msg) = self.fail_with {
            return Err(anyhow::anyhow!("{}", msg));
        }
        Ok(PageSnapshot {
            path: self.path.clone(),
            html: self.html.clone(),
        })
    }
}
