use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use prwatch_core::source::GhCliSource;
use prwatch_server::config::{self, ServerConfig};
use prwatch_server::routes::InnerAppState;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match config::load_dotenv(Path::new(".env")) {
        Ok(Some(path)) => info!("loaded environment from {}", path.display()),
        Ok(None) => {}
        Err(e) => warn!("ignoring .env: {e}"),
    }

    let config = ServerConfig::parse();
    info!("prwatch-server starting");
    info!("repo: {}", config.repo);

    let source = GhCliSource::new(config.gh_bin.clone())
        .with_token(config.gh_token.clone())
        .with_timeout(config.fetch_timeout());

    if !config.public_dir.is_dir() {
        warn!(
            "public dir {} does not exist; /public will return 404",
            config.public_dir.display()
        );
    }

    let state = Arc::new(InnerAppState {
        source: Arc::new(source),
        repo: config.repo.clone(),
        tick: config.tick_interval(),
    });

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    info!("prwatch-server listening on http://{addr}");

    prwatch_server::serve(listener, state, &config.public_dir).await
}
