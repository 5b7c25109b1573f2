use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use super::{parse_pull_requests, PullRequestSource};
use crate::error::StreamError;
use crate::pull_request::{PullRequest, GH_JSON_FIELDS};

/// Lists pull requests by shelling out to the GitHub CLI.
pub struct GhCliSource {
    program: String,
    /// Optional PAT passed to `gh` as GH_TOKEN.
    /// When set, this overrides any local `gh auth` session on the host.
    token: Option<String>,
    timeout: Option<Duration>,
}

impl Default for GhCliSource {
    fn default() -> Self {
        Self::new("gh")
    }
}

impl GhCliSource {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            token: None,
            timeout: None,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Bound each `gh` invocation. Without one a hung `gh` stalls the caller.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    fn command(&self, repo: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args([
            "pr", "list",
            "--repo", repo,
            "--state", "open",
            "--json", GH_JSON_FIELDS,
        ]);
        if let Some(ref token) = self.token {
            cmd.env("GH_TOKEN", token);
        }
        cmd.kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl PullRequestSource for GhCliSource {
    fn name(&self) -> &str {
        "gh"
    }

    async fn list_open(&self, repo: &str) -> Result<Vec<PullRequest>, StreamError> {
        let mut cmd = self.command(repo);
        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, cmd.output())
                .await
                .map_err(|_| {
                    StreamError::Fetch(format!("{} pr list timed out after {limit:?}", self.program))
                })?,
            None => cmd.output().await,
        }
        .map_err(|e| StreamError::Fetch(format!("{} pr list: {e}", self.program)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(StreamError::Fetch(format!(
                "{} pr list failed ({}): {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        let prs = parse_pull_requests(&output.stdout)?;
        debug!("{}: {} open pull requests in {repo}", self.program, prs.len());
        Ok(prs)
    }
}
