use std::path::PathBuf;

use crate::page::PageSnapshot;

use super::PageSource;

/// Loads the page over HTTP, the way a feed reader would see it.
pub struct HttpPageSource {
    client: reqwest::Client,
    url: reqwest::Url,
}

impl HttpPageSource {
    pub fn new(url: reqwest::Url) -> Self {
        HttpPageSource {
            client: reqwest::Client::new(),
            url,
        }
    }
}

impl PageSource for HttpPageSource {
    type Error = reqwest::Error;

    async fn snapshot(&self) -> Result<PageSnapshot, Self::Error> {
        let html = self
            .client
            .get(self.url.clone())
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await?
            .text()
            .await?;

        Ok(PageSnapshot {
            path: self.url.path().to_owned(),
            html,
        })
    }
}

/// Reads a saved page from disk, paired with the navigation path it was
/// captured under (the file itself does not carry one).
pub struct FilePageSource {
    file: PathBuf,
    page_path: String,
}

impl FilePageSource {
    pub fn new(file: impl Into<PathBuf>, page_path: impl Into<String>) -> Self {
        FilePageSource {
            file: file.into(),
            page_path: page_path.into(),
        }
    }
}

impl PageSource for FilePageSource {
    type Error = std::io::Error;

    async fn snapshot(&self) -> Result<PageSnapshot, Self::Error> {
        let html = tokio::fs::read_to_string(&self.file).await?;
        Ok(PageSnapshot {
            path: self.page_path.clone(),
            html,
        })
    }
}
