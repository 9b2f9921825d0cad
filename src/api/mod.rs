//! REST client module for the YouTube Data API v3.
//!
//! The client carries an OAuth2 bearer token obtained by the auth module.
//! Every call is a single request; there is no retry or backoff policy, and
//! a rejected token simply surfaces as an error from the call in question.

pub mod client;
pub mod error;

pub use client::YouTubeClient;
pub use error::ApiError;
