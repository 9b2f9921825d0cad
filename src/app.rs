//! The run pipeline: authenticate, fetch, select, publish.
//!
//! Everything is strictly sequential; the only suspension points are the
//! operator prompts, the API calls, and the token file IO.

use anyhow::Result;
use oauth2::TokenResponse;
use tracing::{debug, info};

use crate::api::YouTubeClient;
use crate::auth::{self, Authenticator, TokenStore};
use crate::config::Config;
use crate::numbering::select_for_module;
use crate::prompt::{ask_module_number, Prompt};
use crate::publish::publish_all;

pub async fn run(config: &Config, prompt: &mut impl Prompt) -> Result<()> {
    let store = TokenStore::new(config.token_path()?);
    let authenticator =
        Authenticator::new(config.client_id.clone(), config.client_secret.clone());
    let token = auth::obtain(&store, &authenticator, prompt).await?;

    let client = YouTubeClient::new(token.access_token().secret().clone())?;

    let uploads = client.uploads_playlist_id().await?;
    debug!(playlist = %uploads, "resolved uploads playlist");

    let entries = client.list_playlist_items(&uploads).await?;
    info!(count = entries.len(), "fetched uploads");

    let module = ask_module_number(prompt)?;
    let selection = select_for_module(entries, module);
    info!(
        count = selection.len(),
        module, "selected entries to renumber"
    );

    let report = publish_all(&client, &selection, &config.target_playlist_id).await;
    println!(
        "Done: {} entries processed, {} updated, {} copied to playlist",
        report.attempted, report.updated, report.inserted
    );

    Ok(())
}
