//! Ordered fallback extraction of a channel's feed URL from a page.
//!
//! Each page kind has its own probe chain; within a chain the first probe
//! that yields a validated result wins and later probes are never
//! consulted. A chain that exhausts every probe yields `None`.

mod channel_home;
mod video;

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    channel::{ChannelId, FeedUrl},
    page::{Page, PageKind},
};

/// Captures the channel-id segment of a `/channel/<id>` URL path.
static CHANNEL_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/channel/(UC[A-Za-z0-9_-]+)").unwrap());

/// Classifies `page` and runs the matching probe chain.
#[tracing::instrument(skip(page), fields(path = page.path()))]
pub fn feed_url_for(page: &Page) -> Option<FeedUrl> {
    match page.kind() {
        PageKind::Video => video::extract(page),
        PageKind::ChannelLike => channel_home::extract(page),
    }
}

/// Pulls a channel id out of a `/channel/<id>` path segment in `url`.
/// The captured segment still goes through full validation, so an id of
/// the wrong length is rejected rather than truncated.
fn channel_id_from_path(url: &str) -> Option<ChannelId> {
    CHANNEL_PATH_RE
        .captures(url)
        .and_then(|cap| cap.get(1))
        .and_then(|segment| ChannelId::parse(segment.as_str()))
}
