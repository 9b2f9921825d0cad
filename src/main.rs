//! modtube - renumber a channel's raw uploads into a course-module playlist.
//!
//! One-shot interactive tool against the YouTube Data API: authenticate,
//! fetch the channel's uploads, rewrite raw titles to `<module>.<n>`, and
//! copy each renumbered video into the configured course playlist.

mod api;
mod app;
mod auth;
mod config;
mod models;
mod numbering;
mod prompt;
mod publish;

use std::io;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use prompt::StdinPrompt;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();
    info!("modtube starting");

    // Missing configuration aborts here, before any network call
    let config = config::Config::from_env()?;

    let mut prompt = StdinPrompt;
    let result = app::run(&config, &mut prompt).await;

    // A failed run is surfaced twice: once through the log layer, once raw
    // on stderr. No structured exit code is set either way.
    if let Err(e) = result {
        error!("run failed: {e:#}");
        eprintln!("{e:?}");
    }

    info!("modtube done");
    Ok(())
}
