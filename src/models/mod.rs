//! Data models for the YouTube Data API resources this tool touches.
//!
//! Only the fields the pipeline actually reads or writes are modeled:
//!
//! - `channel`: resolving the channel's uploads playlist id
//! - `playlist`: listing uploads and inserting into the course playlist
//! - `video`: the metadata update request, plus the working `VideoEntry`

pub mod channel;
pub mod playlist;
pub mod video;

pub use channel::ChannelListResponse;
pub use playlist::{PlaylistItemInsertRequest, PlaylistItemListResponse, ResourceId};
pub use video::{VideoEntry, VideoSnippet, VideoStatus, VideoUpdateRequest};
