use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::PullRequestSource;
use crate::error::StreamError;
use crate::pull_request::PullRequest;

/// A mock source for testing that counts calls and returns a fixed list,
/// optionally failing after a number of successful calls.
pub struct MockSource {
    prs: Vec<PullRequest>,
    calls: AtomicU64,
    fail_after: Option<u64>,
    last_repo: Mutex<Option<String>>,
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl MockSource {
    pub fn new(prs: Vec<PullRequest>) -> Self {
        Self {
            prs,
            calls: AtomicU64::new(0),
            fail_after: None,
            last_repo: Mutex::new(None),
        }
    }

    /// Every call fails.
    pub fn with_fail(self) -> Self {
        self.with_fail_after(0)
    }

    /// The first `ok_calls` calls succeed, every later one fails.
    pub fn with_fail_after(mut self, ok_calls: u64) -> Self {
        self.fail_after = Some(ok_calls);
        self
    }

    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_repo(&self) -> Option<String> {
        self.last_repo.lock().ok().and_then(|r| r.clone())
    }
}

#[async_trait]
impl PullRequestSource for MockSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn list_open(&self, repo: &str) -> Result<Vec<PullRequest>, StreamError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_repo.lock() {
            *last = Some(repo.to_string());
        }
        match self.fail_after {
            Some(ok_calls) if call >= ok_calls => {
                Err(StreamError::Fetch("mock fetch failure".into()))
            }
            _ => Ok(self.prs.clone()),
        }
    }
}
