//! Per-connection push loop.
//!
//! Every SSE client gets its own [`PrStream`] task. The task owns a ticker and
//! the sending half of a channel whose receiving half is the response body.
//! When the transport drops the body (client gone) the channel closes and the
//! task stops.

use std::sync::Arc;
use std::time::Duration;

use prwatch_core::render::render_list;
use prwatch_core::{PullRequestSource, StreamError};
use tokio::sync::mpsc;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

/// One rendered `<li>` list, or the error that ended the stream.
pub type Frame = Result<String, StreamError>;

pub struct PrStream {
    source: Arc<dyn PullRequestSource>,
    repo: String,
    interval: Duration,
}

impl PrStream {
    pub fn new(source: Arc<dyn PullRequestSource>, repo: impl Into<String>, interval: Duration) -> Self {
        Self {
            source,
            repo: repo.into(),
            interval,
        }
    }

    /// Fetch, render and send one frame per tick until `tx` closes or a fetch fails.
    ///
    /// Returns `Ok(())` when the receiver went away. Nothing is sent for a
    /// tick whose fetch or render fails; the error is returned instead.
    pub async fn run(&self, tx: &mpsc::Sender<Frame>) -> Result<(), StreamError> {
        let mut ticker = interval_at(Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;
                _ = tx.closed() => return Ok(()),
                _ = ticker.tick() => {
                    let prs = self.source.list_open(&self.repo).await?;
                    let html = render_list(&prs)?;
                    debug!("pushing {} pull requests", prs.len());
                    if tx.send(Ok(html)).await.is_err() {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Run the loop on its own task and return the receiving end.
    ///
    /// A terminal error is delivered as the last item before the channel closes.
    pub fn spawn(self) -> mpsc::Receiver<Frame> {
        let (tx, rx) = mpsc::channel(1);
        let span = info_span!("sse", conn = %Uuid::new_v4(), repo = %self.repo);

        tokio::spawn(
            async move {
                info!("stream opened (source={}, interval={:?})", self.source.name(), self.interval);
                match self.run(&tx).await {
                    Ok(()) => info!("client disconnected"),
                    Err(e) => {
                        warn!("stream aborted: {e}");
                        let _ = tx.send(Err(e)).await;
                    }
                }
            }
            .instrument(span),
        );

        rx
    }
}
