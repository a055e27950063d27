//! The copy orchestrator: classify the page, extract a feed address,
//! write it to the clipboard and report the outcome.

pub mod builder;

use crate::{
    extract,
    host::{Clipboard, Notifier, PageSource, Toast},
    page::Page,
};

const MSG_NOT_FOUND: &str =
    "Could not find channel information. Make sure this is a channel page.";
const MSG_COPIED: &str = "Copied the RSS feed address to the clipboard!";
const MSG_COPY_FAILED: &str = "Failed to copy to the clipboard.";

/// Commands the copier reacts to. Anything else delivered by the host is
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    CopyRss,
}

impl Command {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "copy_rss" => Some(Command::CopyRss),
            _ => None,
        }
    }
}

/// Receipt for a delivered command. `Dispatched` means the run was carried
/// out, not that it produced a feed address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ack {
    Dispatched,
    Ignored,
}

/// Copies a channel's feed address to the clipboard on command.
///
/// Every run is self-contained: it takes a fresh page snapshot, derives
/// the feed address (or fails), and reports through the notifier. No
/// state is carried between runs, so overlapping runs are harmless.
pub struct RssCopier<P, C, N>
where
    P: PageSource,
    C: Clipboard,
    N: Notifier,
{
    page_source: P,
    clipboard: C,
    notifier: N,
}

impl<P, C, N> RssCopier<P, C, N>
where
    P: PageSource,
    C: Clipboard,
    N: Notifier,
{
    /// Inbound command entry point. Returns exactly one [`Ack`] per call:
    /// `Dispatched` after a `copy_rss` run has completed (successfully or
    /// not), `Ignored` for any unrecognized command.
    #[tracing::instrument(skip(self))]
    pub async fn on_command(&self, command: &str) -> Ack {
        match Command::parse(command) {
            Some(Command::CopyRss) => {
                tracing::info!(command, "Command received");
                self.copy_rss().await;
                Ack::Dispatched
            }
            None => {
                tracing::debug!(command, "Ignoring unrecognized command");
                Ack::Ignored
            }
        }
    }

    /// One extraction-and-copy run. Never returns an error: every failure
    /// path ends in a log line and an error toast.
    #[tracing::instrument(skip(self))]
    async fn copy_rss(&self) {
        let snapshot = match self.page_source.snapshot().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::error!(error = ?e, "Failed to read page state");
                self.notifier.notify(Toast::error(MSG_NOT_FOUND));
                return;
            }
        };

        let page = Page::from_snapshot(&snapshot);
        let Some(feed_url) = extract::feed_url_for(&page) else {
            tracing::warn!(path = page.path(), "All probes exhausted, no feed address");
            self.notifier.notify(Toast::error(MSG_NOT_FOUND));
            return;
        };

        match self.clipboard.write_text(feed_url.as_str()).await {
            Ok(()) => {
                tracing::info!(%feed_url, "Feed address copied to clipboard");
                self.notifier.notify(Toast::success(MSG_COPIED));
            }
            Err(e) => {
                tracing::error!(error = ?e, "Clipboard write failed");
                self.notifier.notify(Toast::error(MSG_COPY_FAILED));
            }
        }
    }
}
