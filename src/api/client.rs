//! HTTP client for the YouTube Data API v3.
//!
//! This module provides the `YouTubeClient` struct: a thin wrapper over
//! `reqwest` carrying the OAuth2 bearer token. It resolves the channel's
//! uploads playlist, lists its entries, and performs the two publish calls
//! (metadata update and playlist insert).

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::models::playlist::PlaylistItemInsertSnippet;
use crate::models::{
    ChannelListResponse, PlaylistItemInsertRequest, PlaylistItemListResponse, ResourceId,
    VideoEntry, VideoSnippet, VideoStatus, VideoUpdateRequest,
};
use crate::publish::PublishApi;

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// Base URL for YouTube Data API v3 endpoints
const API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Single-page cap when listing the uploads playlist; no pagination is done.
const MAX_PLAYLIST_PAGE: u32 = 50;

/// Category id applied to every published video (27 = Education)
const VIDEO_CATEGORY_ID: &str = "27";

/// Privacy status applied to every published video
const VIDEO_PRIVACY: &str = "private";

/// API client for the YouTube Data API.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct YouTubeClient {
    client: Client,
    access_token: String,
}

impl YouTubeClient {
    /// Create a new API client with the given bearer token
    pub fn new(access_token: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            access_token,
        })
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }

    async fn get<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> Result<T> {
        let response = self
            .client
            .get(url)
            .query(query)
            .bearer_auth(&self.access_token)
            .send()
            .await
            .with_context(|| format!("Failed to send GET request to {}", url))?;

        let response = Self::check_response(response).await?;

        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }

    /// Send a JSON body, discarding the response payload on success.
    async fn send_json<B: Serialize>(
        &self,
        method: Method,
        url: &str,
        query: &[(&str, &str)],
        body: &B,
    ) -> Result<()> {
        let response = self
            .client
            .request(method.clone(), url)
            .query(query)
            .bearer_auth(&self.access_token)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to send {} request to {}", method, url))?;

        Self::check_response(response).await?;
        Ok(())
    }

    // ===== Data Fetching Methods =====

    /// Resolve the channel's platform-managed uploads playlist id.
    pub async fn uploads_playlist_id(&self) -> Result<String> {
        let url = format!("{}/channels", API_BASE_URL);
        let response: ChannelListResponse = self
            .get(&url, &[("part", "contentDetails"), ("mine", "true")])
            .await?;

        response
            .items
            .into_iter()
            .filter_map(|channel| channel.content_details)
            .filter_map(|details| details.related_playlists)
            .filter_map(|playlists| playlists.uploads)
            .find(|id| !id.is_empty())
            .ok_or_else(|| anyhow::anyhow!("Channel has no usable uploads playlist"))
    }

    /// Fetch the first page (up to 50 entries) of a playlist.
    ///
    /// Entries with no snippet come back with empty id/title; downstream
    /// filtering decides what to do with them.
    pub async fn list_playlist_items(&self, playlist_id: &str) -> Result<Vec<VideoEntry>> {
        let url = format!("{}/playlistItems", API_BASE_URL);
        let max_results = MAX_PLAYLIST_PAGE.to_string();
        let response: PlaylistItemListResponse = self
            .get(
                &url,
                &[
                    ("part", "snippet"),
                    ("playlistId", playlist_id),
                    ("maxResults", &max_results),
                ],
            )
            .await?;

        debug!(count = response.items.len(), "fetched playlist page");

        Ok(response
            .items
            .into_iter()
            .map(|item| {
                let snippet = item.snippet.unwrap_or_default();
                VideoEntry {
                    video_id: snippet
                        .resource_id
                        .and_then(|r| r.video_id)
                        .unwrap_or_default(),
                    title: snippet.title.unwrap_or_default(),
                }
            })
            .collect())
    }
}

// The two publish calls live behind a trait so the publish loop can be
// tested against a mock.
impl PublishApi for YouTubeClient {
    /// Update a video's title along with the fixed category and privacy.
    async fn update_video(&self, video_id: &str, title: &str) -> Result<()> {
        let url = format!("{}/videos", API_BASE_URL);
        let body = VideoUpdateRequest {
            id: video_id.to_string(),
            snippet: VideoSnippet {
                title: title.to_string(),
                category_id: VIDEO_CATEGORY_ID.to_string(),
            },
            status: VideoStatus {
                privacy_status: VIDEO_PRIVACY.to_string(),
                self_declared_made_for_kids: false,
            },
        };

        self.send_json(Method::PUT, &url, &[("part", "snippet,status")], &body)
            .await
    }

    /// Copy a video into the destination playlist.
    async fn insert_playlist_item(&self, playlist_id: &str, video_id: &str) -> Result<()> {
        let url = format!("{}/playlistItems", API_BASE_URL);
        let body = PlaylistItemInsertRequest {
            snippet: PlaylistItemInsertSnippet {
                playlist_id: playlist_id.to_string(),
                resource_id: ResourceId {
                    kind: "youtube#video".to_string(),
                    video_id: Some(video_id.to_string()),
                },
            },
        };

        self.send_json(Method::POST, &url, &[("part", "snippet")], &body)
            .await
    }
}
