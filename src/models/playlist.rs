//! Playlist item resources: listing the uploads playlist and inserting
//! entries into the destination playlist.
//!
//! See: <https://developers.google.com/youtube/v3/docs/playlistItems>

use serde::{Deserialize, Serialize};

/// Response structure for `playlistItems.list` with `part=snippet`.
#[derive(Debug, Deserialize)]
pub struct PlaylistItemListResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
}

/// One video's membership record inside a playlist.
#[derive(Debug, Deserialize)]
pub struct PlaylistItem {
    pub snippet: Option<PlaylistItemSnippet>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlaylistItemSnippet {
    /// The item's title; for uploads this is the video's title.
    pub title: Option<String>,
    #[serde(rename = "resourceId")]
    pub resource_id: Option<ResourceId>,
}

/// Identifier of the resource a playlist item points at.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResourceId {
    /// The kind of the referenced resource, `youtube#video` here.
    pub kind: String,
    #[serde(rename = "videoId", skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
}

/// Request body for `playlistItems.insert` with `part=snippet`.
#[derive(Debug, Serialize)]
pub struct PlaylistItemInsertRequest {
    pub snippet: PlaylistItemInsertSnippet,
}

#[derive(Debug, Serialize)]
pub struct PlaylistItemInsertSnippet {
    #[serde(rename = "playlistId")]
    pub playlist_id: String,
    #[serde(rename = "resourceId")]
    pub resource_id: ResourceId,
}
