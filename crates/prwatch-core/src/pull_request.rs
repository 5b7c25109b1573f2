use serde::{Deserialize, Serialize};

/// One open pull request as reported by `gh pr list --json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: i64,
    pub title: String,
    /// ISO-8601, e.g. `2024-03-05T14:22:09Z`. Kept as the raw upstream string.
    #[serde(rename = "createdAt")]
    pub created_at: String,
    /// Upstream state string: `OPEN`, `CLOSED` or `MERGED`.
    pub state: String,
}

/// Fields requested from `gh`, in the order the renderer uses them.
pub const GH_JSON_FIELDS: &str = "number,title,createdAt,state";
