use std::path::PathBuf;

use anyhow::{Context, Result};
use oauth2::basic::BasicTokenResponse;

/// On-disk cache for the OAuth token, the tool's only durable state.
///
/// The file holds the identity provider's token-exchange response verbatim
/// (access/refresh token pair) as JSON. No expiry bookkeeping is done
/// locally; a stale token is only discovered when the platform rejects it.
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the cached token if a readable, well-formed one exists.
    ///
    /// A missing or malformed file is a cache miss, not an error; the
    /// caller falls back to the interactive flow.
    pub fn load(&self) -> Option<BasicTokenResponse> {
        let contents = std::fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Persist the token to disk, creating parent directories as needed.
    pub fn save(&self, token: &BasicTokenResponse) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create token cache directory")?;
        }
        let contents = serde_json::to_string_pretty(token)?;
        std::fs::write(&self.path, contents).context("Failed to write token file")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oauth2::basic::BasicTokenType;
    use oauth2::{AccessToken, EmptyExtraTokenFields, RefreshToken, StandardTokenResponse, TokenResponse};

    fn sample_token() -> BasicTokenResponse {
        let mut token = StandardTokenResponse::new(
            AccessToken::new("access-123".to_string()),
            BasicTokenType::Bearer,
            EmptyExtraTokenFields {},
        );
        token.set_refresh_token(Some(RefreshToken::new("refresh-456".to_string())));
        token
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::new(dir.path().join("token.json"));

        store.save(&sample_token()).unwrap();
        let loaded = store.load().expect("token should load back");

        assert_eq!(loaded.access_token().secret(), "access-123");
        assert_eq!(
            loaded.refresh_token().map(|t| t.secret().as_str()),
            Some("refresh-456")
        );
    }

    #[test]
    fn test_missing_file_is_a_cache_miss() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::new(dir.path().join("absent.json"));
        assert!(store.load().is_none());
    }

    #[test]
    fn test_malformed_file_is_a_cache_miss() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("token.json");
        std::fs::write(&path, "not json at all").unwrap();
        assert!(TokenStore::new(path).load().is_none());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::new(dir.path().join("nested/deeper/token.json"));
        store.save(&sample_token()).unwrap();
        assert!(store.load().is_some());
    }
}
