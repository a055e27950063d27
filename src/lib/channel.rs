//! Channel identifiers and the feed addresses derived from them.

use std::{fmt, sync::LazyLock};

use regex::Regex;

/// Matches a channel id anywhere in free text: the `UC` prefix followed by
/// exactly 22 id characters.
static CHANNEL_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"UC[A-Za-z0-9_-]{22}").unwrap());

/// Anchored variant used to validate a complete candidate string.
static CHANNEL_ID_EXACT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^UC[A-Za-z0-9_-]{22}$").unwrap());

/// A validated YouTube channel id (`UC` + 22 of `[A-Za-z0-9_-]`).
///
/// Candidates picked out of structured data or URL segments go through
/// [`ChannelId::parse`]; raw markup is searched with [`ChannelId::scan`].
/// There is no other way to construct one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelId(String);

impl ChannelId {
    /// Validates `candidate` as a complete channel id.
    pub fn parse(candidate: &str) -> Option<Self> {
        CHANNEL_ID_EXACT_RE
            .is_match(candidate)
            .then(|| ChannelId(candidate.to_owned()))
    }

    /// Returns the first channel id pattern occurring anywhere in `haystack`.
    pub fn scan(haystack: &str) -> Option<Self> {
        CHANNEL_ID_RE
            .find(haystack)
            .map(|m| ChannelId(m.as_str().to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A canonical RSS feed address for a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedUrl(String);

impl FeedUrl {
    const FEED_BASE_URL: &'static str = "https://www.youtube.com/feeds/videos.xml";

    /// Builds the feed address for a channel. Pure and total: the id is
    /// already validated, so no escaping or error path is needed.
    pub fn for_channel(id: &ChannelId) -> Self {
        FeedUrl(format!("{}?channel_id={}", Self::FEED_BASE_URL, id))
    }

    /// Wraps an address that the page itself already advertises as a feed
    /// URL. Callers are responsible for having checked the channel-id
    /// parameter before accepting it.
    pub(crate) fn verbatim(href: &str) -> Self {
        FeedUrl(href.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
