//! Channel resources from the `channels.list` API call.
//!
//! Used once per run to resolve the platform-managed "uploads" playlist
//! that holds every video the channel has uploaded.
//!
//! See: <https://developers.google.com/youtube/v3/docs/channels/list>

use serde::Deserialize;

/// Response structure for `channels.list` with `part=contentDetails`.
#[derive(Debug, Deserialize)]
pub struct ChannelListResponse {
    #[serde(default)]
    pub items: Vec<Channel>,
}

#[derive(Debug, Deserialize)]
pub struct Channel {
    #[serde(rename = "contentDetails")]
    pub content_details: Option<ChannelContentDetails>,
}

#[derive(Debug, Deserialize)]
pub struct ChannelContentDetails {
    #[serde(rename = "relatedPlaylists")]
    pub related_playlists: Option<RelatedPlaylists>,
}

/// Playlists the platform maintains on behalf of the channel.
#[derive(Debug, Deserialize)]
pub struct RelatedPlaylists {
    /// The playlist containing the channel's uploaded videos.
    pub uploads: Option<String>,
}
