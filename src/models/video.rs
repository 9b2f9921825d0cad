//! The video metadata update request, plus the working entry type the
//! pipeline passes between fetch, numbering, and publish.
//!
//! See: <https://developers.google.com/youtube/v3/docs/videos/update>

use serde::Serialize;

/// One video in the working list: the stable platform id plus its
/// (possibly rewritten) title. The id never changes across updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoEntry {
    pub video_id: String,
    pub title: String,
}

/// Request body for `videos.update` with `part=snippet,status`.
#[derive(Debug, Serialize)]
pub struct VideoUpdateRequest {
    pub id: String,
    pub snippet: VideoSnippet,
    pub status: VideoStatus,
}

#[derive(Debug, Serialize)]
pub struct VideoSnippet {
    pub title: String,
    #[serde(rename = "categoryId")]
    pub category_id: String,
}

#[derive(Debug, Serialize)]
pub struct VideoStatus {
    #[serde(rename = "privacyStatus")]
    pub privacy_status: String,
    #[serde(rename = "selfDeclaredMadeForKids")]
    pub self_declared_made_for_kids: bool,
}
