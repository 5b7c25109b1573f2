use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::builder::NonEmptyStringValueParser;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "prwatch-server",
    about = "Stream a repository's open pull requests to browsers over SSE"
)]
pub struct ServerConfig {
    /// Repository to watch, as `owner/name`
    #[arg(long, env = "REPO", value_parser = NonEmptyStringValueParser::new())]
    pub repo: String,

    /// Address to bind
    #[arg(long, env = "PRWATCH_BIND", default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PRWATCH_PORT", default_value = "3434")]
    pub port: u16,

    /// Directory served under /public
    #[arg(long, env = "PRWATCH_PUBLIC_DIR", default_value = "public")]
    pub public_dir: PathBuf,

    /// Interval between pushes on each SSE connection (milliseconds)
    #[arg(
        long,
        env = "PRWATCH_TICK_MS",
        default_value = "1000",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub tick_ms: u64,

    /// GitHub CLI executable
    #[arg(long, env = "PRWATCH_GH_BIN", default_value = "gh")]
    pub gh_bin: String,

    /// Token handed to the GitHub CLI as GH_TOKEN
    #[arg(long, env = "GH_TOKEN", hide_env_values = true)]
    pub gh_token: Option<String>,

    /// Kill `gh` calls that take longer than this (seconds). Unbounded if unset.
    #[arg(long, env = "PRWATCH_FETCH_TIMEOUT")]
    pub fetch_timeout: Option<u64>,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout.map(Duration::from_secs)
    }
}

/// Load `path` (normally `.env` in the working directory) into the process
/// environment. Variables that are already set are left alone. A missing
/// file yields `Ok(None)`.
pub fn load_dotenv(path: &Path) -> Result<Option<PathBuf>, dotenvy::Error> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(Some(path.to_path_buf())),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}
