//! Application configuration management.
//!
//! All required settings come from the environment (a `.env` file is honored
//! at startup): the OAuth client id and secret, and the id of the playlist
//! that renumbered videos are copied into.
//!
//! The cached OAuth token is stored at `~/.config/modtube/token.json`.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application name used for the token cache directory path
const APP_NAME: &str = "modtube";

/// Token cache file name
const TOKEN_FILE: &str = "token.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub target_playlist_id: String,
    token_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// A missing variable is a fatal startup error, raised before any
    /// network call is made.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            client_id: require("MODTUBE_CLIENT_ID")?,
            client_secret: require("MODTUBE_CLIENT_SECRET")?,
            target_playlist_id: require("MODTUBE_TARGET_PLAYLIST")?,
            token_file: env::var_os("MODTUBE_TOKEN_FILE").map(PathBuf::from),
        })
    }

    /// Path of the cached OAuth token file.
    ///
    /// `MODTUBE_TOKEN_FILE` overrides the default location under the
    /// platform config directory.
    pub fn token_path(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.token_file {
            return Ok(path.clone());
        }
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(TOKEN_FILE))
    }
}

fn require(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("Missing required environment variable {}", name))
}
