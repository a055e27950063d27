//! Probe chain for single-video (`/watch`) pages.

use std::sync::LazyLock;

use scraper::Selector;

use crate::{
    channel::{ChannelId, FeedUrl},
    page::Page,
    parser::script_data,
    types::PlayerResponse,
};

use super::channel_id_from_path;

/// Owner/uploader region selectors, most specific first. This region is
/// kept live-updated by the host page's client-side navigation, which is
/// why the raw markup scan outranks the structured player response.
static OWNER_SELECTORS: LazyLock<Vec<(&'static str, Selector)>> = LazyLock::new(|| {
    [
        "#owner",
        "ytd-video-owner-renderer",
        "#upload-info",
        "#channel-name",
        "#subscribe-button",
    ]
    .into_iter()
    .map(|raw| (raw, Selector::parse(raw).unwrap()))
    .collect()
});

static INFOCARD_LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("#infocard-videos-button a").unwrap());

static PLAYER_CHANNEL_LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.ytp-ce-channel-title.ytp-ce-link").unwrap());

pub(super) fn extract(page: &Page) -> Option<FeedUrl> {
    owner_region(page)
        .or_else(|| player_response(page))
        .or_else(|| infocard_link(page))
        .or_else(|| player_channel_link(page))
        .map(|id| FeedUrl::for_channel(&id))
}

/// Probe 1: scan the rendered markup of the first present owner-region
/// element for a channel id pattern.
fn owner_region(page: &Page) -> Option<ChannelId> {
    for (raw, selector) in OWNER_SELECTORS.iter() {
        let Some(element) = page.select_first(selector) else {
            continue;
        };
        if let Some(id) = ChannelId::scan(&element.html()) {
            tracing::info!(selector = raw, %id, "Channel id found in owner region");
            return Some(id);
        }
    }
    None
}

/// Probe 2: `ytInitialPlayerResponse.videoDetails.channelId`.
fn player_response(page: &Page) -> Option<ChannelId> {
    let data = script_data(page, "ytInitialPlayerResponse")?;
    let response: PlayerResponse = serde_json::from_value(data).ok()?;
    let id = response
        .video_details
        .channel_id
        .as_deref()
        .and_then(ChannelId::parse)?;
    tracing::info!(%id, "Channel id found in ytInitialPlayerResponse");
    Some(id)
}

/// Probe 3: the in-video info-card promotion link.
fn infocard_link(page: &Page) -> Option<ChannelId> {
    let href = page
        .select_first(&INFOCARD_LINK_SELECTOR)?
        .value()
        .attr("href")?;
    let id = channel_id_from_path(href)?;
    tracing::info!(%id, "Channel id found in info-card link");
    Some(id)
}

/// Probe 4: the player overlay's end-card channel link.
fn player_channel_link(page: &Page) -> Option<ChannelId> {
    let href = page
        .select_first(&PLAYER_CHANNEL_LINK_SELECTOR)?
        .value()
        .attr("href")?;
    let id = channel_id_from_path(href)?;
    tracing::info!(%id, "Channel id found in player channel link");
    Some(id)
}
