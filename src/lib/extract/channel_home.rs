//! Probe chain for channel-like pages (channel home, handle pages, and any
//! other non-video view).

use std::sync::LazyLock;

use scraper::Selector;

use crate::{
    channel::{ChannelId, FeedUrl},
    page::Page,
    parser::script_data,
    types::InitialData,
};

use super::channel_id_from_path;

static ALTERNATE_FEED_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"link[rel="alternate"][type="application/rss+xml"]"#).unwrap()
});

static CHANNEL_ID_META_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[itemprop="channelId"]"#).unwrap());

static CANONICAL_LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"link[rel="canonical"]"#).unwrap());

static OG_URL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"meta[property="og:url"]"#).unwrap());

pub(super) fn extract(page: &Page) -> Option<FeedUrl> {
    if let Some(url) = alternate_feed_link(page) {
        return Some(url);
    }
    channel_id_meta(page)
        .or_else(|| canonical_link(page))
        .or_else(|| og_url(page))
        .or_else(|| initial_data(page))
        .or_else(|| body_scan(page))
        .map(|id| FeedUrl::for_channel(&id))
}

/// Probe 1: the page's own alternate RSS link. Its address already carries
/// the channel-id parameter, so it is used verbatim instead of re-derived.
fn alternate_feed_link(page: &Page) -> Option<FeedUrl> {
    let href = page
        .select_first(&ALTERNATE_FEED_SELECTOR)?
        .value()
        .attr("href")?;
    if !href.contains("channel_id=UC") {
        return None;
    }
    tracing::info!(href, "Feed address found in alternate link tag");
    Some(FeedUrl::verbatim(href))
}

/// Probe 2: `meta[itemprop="channelId"]`, present on handle pages too.
fn channel_id_meta(page: &Page) -> Option<ChannelId> {
    let content = page
        .select_first(&CHANNEL_ID_META_SELECTOR)?
        .value()
        .attr("content")
        .filter(|content| !content.is_empty())?;
    let id = ChannelId::parse(content)?;
    tracing::info!(%id, "Channel id found in channelId meta tag");
    Some(id)
}

/// Probe 3: `/channel/<id>` segment of the canonical link.
fn canonical_link(page: &Page) -> Option<ChannelId> {
    let href = page
        .select_first(&CANONICAL_LINK_SELECTOR)?
        .value()
        .attr("href")?;
    let id = channel_id_from_path(href)?;
    tracing::info!(%id, "Channel id found in canonical link");
    Some(id)
}

/// Probe 4: `/channel/<id>` segment of the Open Graph URL.
fn og_url(page: &Page) -> Option<ChannelId> {
    let content = page.select_first(&OG_URL_SELECTOR)?.value().attr("content")?;
    let id = channel_id_from_path(content)?;
    tracing::info!(%id, "Channel id found in og:url meta tag");
    Some(id)
}

/// Probe 5: `ytInitialData.metadata.channelMetadataRenderer.externalId`.
fn initial_data(page: &Page) -> Option<ChannelId> {
    let data = script_data(page, "ytInitialData")?;
    let initial_data: InitialData = serde_json::from_value(data).ok()?;
    let id = initial_data
        .metadata
        .channel_metadata_renderer
        .external_id
        .as_deref()
        .and_then(ChannelId::parse)?;
    tracing::info!(%id, "Channel id found in ytInitialData");
    Some(id)
}

/// Probe 6, last resort: first channel id pattern anywhere in the body.
fn body_scan(page: &Page) -> Option<ChannelId> {
    let id = ChannelId::scan(&page.body_html())?;
    tracing::info!(%id, "Channel id found by body markup scan");
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED_A: &str =
        "https://www.youtube.com/feeds/videos.xml?channel_id=UCaaaaaaaaaaaaaaaaaaaaaa";
    const FEED_B: &str =
        "https://www.youtube.com/feeds/videos.xml?channel_id=UCbbbbbbbbbbbbbbbbbbbbbb";

    fn channel_page(html: &str) -> Page {
        Page::new("/@SomeHandle", html)
    }

    #[test]
    fn test_alternate_feed_link_used_verbatim() {
        // Query params in an unusual order must survive untouched.
        let html = r#"
            <head>
                <link rel="alternate" type="application/rss+xml" title="RSS"
                      href="https://www.youtube.com/feeds/videos.xml?channel_id=UCaaaaaaaaaaaaaaaaaaaaaa&extra=1">
                <meta itemprop="channelId" content="UCbbbbbbbbbbbbbbbbbbbbbb">
            </head>
        "#;
        let url = extract(&channel_page(html)).expect("alternate link should win");
        assert_eq!(
            url.as_str(),
            "https://www.youtube.com/feeds/videos.xml?channel_id=UCaaaaaaaaaaaaaaaaaaaaaa&extra=1"
        );
    }

    #[test]
    fn test_alternate_link_without_channel_param_is_skipped() {
        let html = r#"
            <head>
                <link rel="alternate" type="application/rss+xml"
                      href="https://www.youtube.com/feeds/videos.xml?playlist_id=PL123">
                <meta itemprop="channelId" content="UCbbbbbbbbbbbbbbbbbbbbbb">
            </head>
        "#;
        let url = extract(&channel_page(html)).expect("meta tag should match");
        assert_eq!(url.as_str(), FEED_B);
    }

    #[test]
    fn test_channel_id_meta() {
        let html = r#"<head><meta itemprop="channelId" content="UCaaaaaaaaaaaaaaaaaaaaaa"></head>"#;
        let url = extract(&channel_page(html)).expect("meta tag should match");
        assert_eq!(url.as_str(), FEED_A);
    }

    #[test]
    fn test_empty_meta_content_falls_through() {
        let html = r#"
            <head>
                <meta itemprop="channelId" content="">
                <link rel="canonical" href="https://www.youtube.com/channel/UCaaaaaaaaaaaaaaaaaaaaaa">
            </head>
        "#;
        let url = extract(&channel_page(html)).expect("canonical link should match");
        assert_eq!(url.as_str(), FEED_A);
    }

    #[test]
    fn test_canonical_link_fallback() {
        let html = r#"
            <head>
                <link rel="canonical" href="https://www.youtube.com/channel/UCaaaaaaaaaaaaaaaaaaaaaa">
            </head>
        "#;
        let url = extract(&channel_page(html)).expect("canonical link should match");
        assert_eq!(url.as_str(), FEED_A);
    }

    #[test]
    fn test_og_url_fallback() {
        let html = r#"
            <head>
                <meta property="og:url" content="https://www.youtube.com/channel/UCaaaaaaaaaaaaaaaaaaaaaa">
            </head>
        "#;
        let url = extract(&channel_page(html)).expect("og:url should match");
        assert_eq!(url.as_str(), FEED_A);
    }

    #[test]
    fn test_initial_data_fallback() {
        let html = r#"
            <script>
                var ytInitialData = {"metadata": {"channelMetadataRenderer": {"title": "Some Channel", "externalId": "UCaaaaaaaaaaaaaaaaaaaaaa"}}};
            </script>
        "#;
        let url = extract(&channel_page(html)).expect("ytInitialData should match");
        assert_eq!(url.as_str(), FEED_A);
    }

    #[test]
    fn test_initial_data_unexpected_shape_falls_through() {
        // metadata of the wrong type must not abort the chain; the body
        // scan still gets its turn.
        let html = r#"
            <head>
                <script>
                    var ytInitialData = {"metadata": "gone"};
                </script>
            </head>
            <body><span>UCbbbbbbbbbbbbbbbbbbbbbb</span></body>
        "#;
        let url = extract(&channel_page(html)).expect("body scan should match");
        assert_eq!(url.as_str(), FEED_B);
    }

    #[test]
    fn test_body_scan_last_resort() {
        let html = r#"
            <body>
                <div data-params="browse:UCaaaaaaaaaaaaaaaaaaaaaa"></div>
            </body>
        "#;
        let url = extract(&channel_page(html)).expect("body scan should match");
        assert_eq!(url.as_str(), FEED_A);
    }

    #[test]
    fn test_probe_order_meta_beats_canonical() {
        let html = r#"
            <head>
                <meta itemprop="channelId" content="UCaaaaaaaaaaaaaaaaaaaaaa">
                <link rel="canonical" href="https://www.youtube.com/channel/UCbbbbbbbbbbbbbbbbbbbbbb">
            </head>
        "#;
        let url = extract(&channel_page(html)).expect("extraction should succeed");
        assert_eq!(url.as_str(), FEED_A, "meta tag must win over canonical");
    }

    #[test]
    fn test_invalid_meta_id_falls_through_to_body_scan() {
        let html = r#"
            <head><meta itemprop="channelId" content="not-a-channel-id"></head>
            <body><span>UCbbbbbbbbbbbbbbbbbbbbbb</span></body>
        "#;
        let url = extract(&channel_page(html)).expect("body scan should match");
        assert_eq!(url.as_str(), FEED_B);
    }

    #[test]
    fn test_no_signals_yields_none() {
        let html = r#"<head><title>plain page</title></head><body><p>nothing</p></body>"#;
        assert!(extract(&channel_page(html)).is_none());
    }
}
