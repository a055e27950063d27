//! Read-only snapshot of the page an extraction run operates on.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

static SCRIPT_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("script").unwrap());
static BODY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("body").unwrap());

/// Raw page state as delivered by a [`PageSource`](crate::PageSource):
/// the navigation path plus the page markup, captured in one read.
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    pub path: String,
    pub html: String,
}

/// The kind of view the page currently shows, derived from its path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// A single-video view (`/watch`).
    Video,
    /// Channel home, handle pages and anything else.
    ChannelLike,
}

/// A parsed page, owned by a single extraction run and discarded with it.
/// The underlying markup belongs to the host site and may change between
/// runs, so a fresh `Page` is built from a new snapshot every time.
pub struct Page {
    path: String,
    document: Html,
}

impl Page {
    pub fn new(path: impl Into<String>, html: &str) -> Self {
        Page {
            path: path.into(),
            document: Html::parse_document(html),
        }
    }

    pub fn from_snapshot(snapshot: &PageSnapshot) -> Self {
        Page::new(snapshot.path.as_str(), &snapshot.html)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Classifies the page by its navigation path. Total: anything that is
    /// not a video view is treated as channel-like.
    pub fn kind(&self) -> PageKind {
        if self.path.contains("/watch") {
            PageKind::Video
        } else {
            PageKind::ChannelLike
        }
    }

    /// First element matching `selector`, if any.
    pub(crate) fn select_first(&self, selector: &Selector) -> Option<ElementRef<'_>> {
        self.document.select(selector).next()
    }

    /// Text content of every script element on the page, in document order.
    pub(crate) fn scripts(&self) -> impl Iterator<Item = String> + '_ {
        self.document
            .select(&SCRIPT_SELECTOR)
            .map(|script| script.text().collect::<String>())
    }

    /// Rendered body markup, used by the last-resort full-text scan.
    pub(crate) fn body_html(&self) -> String {
        self.select_first(&BODY_SELECTOR)
            .map(|body| body.inner_html())
            .unwrap_or_else(|| self.document.html())
    }
}
