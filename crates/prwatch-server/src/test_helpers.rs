use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use prwatch_core::PullRequestSource;
use tokio::net::TcpListener;

use crate::routes::{build_router, InnerAppState};

/// Repository name used by every test router.
pub const TEST_REPO: &str = "octo/repo";

/// Build a test router around `source`, ticking every `tick`, serving `public_dir`.
pub fn test_router(source: Arc<dyn PullRequestSource>, tick: Duration, public_dir: &Path) -> Router {
    let state = Arc::new(InnerAppState {
        source,
        repo: TEST_REPO.to_string(),
        tick,
    });
    build_router(state, public_dir)
}

/// A running test server with base_url and background task handle.
pub struct TestServer {
    pub base_url: String,
    _handle: tokio::task::JoinHandle<()>,
}

/// Spawn an axum test server on a random port. Returns the TestServer
/// with the `base_url` (e.g. "http://127.0.0.1:12345").
pub async fn spawn_test_server(source: Arc<dyn PullRequestSource>, tick: Duration) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{addr}");
    let app = test_router(source, tick, Path::new("public"));
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    TestServer {
        base_url,
        _handle: handle,
    }
}
