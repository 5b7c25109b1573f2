pub mod sse;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, Method};
use axum::response::Redirect;
use axum::routing::get;
use axum::Router;
use prwatch_core::PullRequestSource;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub struct InnerAppState {
    pub source: Arc<dyn PullRequestSource>,
    /// `owner/name` of the watched repository.
    pub repo: String,
    pub tick: Duration,
}

pub type AppState = Arc<InnerAppState>;

pub fn build_router(state: AppState, public_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .merge(sse::routes())
        .route("/", get(|| async { Redirect::temporary("/public/index.html") }))
        .nest_service("/public", ServeDir::new(public_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .with_state(state)
}
