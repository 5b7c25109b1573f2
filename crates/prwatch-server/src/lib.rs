pub mod config;
pub mod routes;
pub mod stream;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

use std::path::Path;

use anyhow::Result;
use tokio::net::TcpListener;

use routes::AppState;

pub async fn serve(listener: TcpListener, state: AppState, public_dir: &Path) -> Result<()> {
    let app = routes::build_router(state, public_dir);
    axum::serve(listener, app).await?;
    Ok(())
}
