use axum::body::Body;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use futures::stream;
use prwatch_core::render::{encode_event, PR_EVENT};

use super::AppState;
use crate::stream::PrStream;

pub fn routes() -> Router<AppState> {
    Router::new().route("/sse", get(stream_pull_requests))
}

/// `event: pr` once per tick until the client leaves or a fetch fails.
/// A failed fetch aborts the body, so the client sees the connection drop.
async fn stream_pull_requests(State(state): State<AppState>) -> impl IntoResponse {
    let rx = PrStream::new(state.source.clone(), state.repo.clone(), state.tick).spawn();

    // Frames are encoded by hand: an empty list must still carry a `data:` line.
    let frames = stream::unfold(rx, |mut rx| async move {
        let frame = rx.recv().await?;
        Some((frame.map(|html| encode_event(PR_EVENT, &html)), rx))
    });

    (
        [
            (header::CONTENT_TYPE, "text/event-stream"),
            (header::CACHE_CONTROL, "no-cache"),
            (header::CONNECTION, "keep-alive"),
        ],
        Body::from_stream(frames),
    )
}
