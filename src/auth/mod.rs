//! Credential store: cached-token loading plus the interactive
//! authorization-code flow used on a cache miss.
//!
//! Two states only. Cached: the token file exists and parses, so it is
//! installed as-is. Uncached: the operator walks through the browser
//! authorization once and the exchanged token is persisted for later runs.
//! There is no refresh or expiry handling; a stale token fails at the API
//! boundary.

pub mod oauth;
pub mod token;

pub use oauth::Authenticator;
pub use token::TokenStore;

use anyhow::Result;
use oauth2::basic::BasicTokenResponse;
use tracing::{debug, info};

use crate::prompt::Prompt;

/// Produce a usable token, running the interactive flow only on cache miss.
pub async fn obtain(
    store: &TokenStore,
    authenticator: &Authenticator,
    prompt: &mut impl Prompt,
) -> Result<BasicTokenResponse> {
    if let Some(token) = store.load() {
        debug!("using cached token");
        return Ok(token);
    }

    info!("no cached token, starting interactive authorization");
    let token = authenticator.authenticate(prompt).await?;
    store.save(&token)?;
    Ok(token)
}
