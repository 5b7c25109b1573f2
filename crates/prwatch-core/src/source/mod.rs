pub mod gh;
pub mod mock;

use async_trait::async_trait;

use crate::error::StreamError;
use crate::pull_request::PullRequest;

pub use gh::GhCliSource;
pub use mock::MockSource;

/// Somewhere open pull requests can be listed from.
#[async_trait]
pub trait PullRequestSource: Send + Sync {
    fn name(&self) -> &str;

    /// List the currently open pull requests of `repo` (`owner/name`),
    /// in the order the upstream returns them.
    async fn list_open(&self, repo: &str) -> Result<Vec<PullRequest>, StreamError>;
}

/// Parse the JSON array printed by `gh pr list --json number,title,createdAt,state`.
pub fn parse_pull_requests(payload: &[u8]) -> Result<Vec<PullRequest>, StreamError> {
    serde_json::from_slice(payload).map_err(|e| StreamError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_gh_output() {
        let payload = br#"[
            {"number":7,"title":"Fix bug","createdAt":"2024-01-02T03:04:05Z","state":"OPEN"},
            {"number":3,"title":"Add docs","createdAt":"2023-12-31T23:59:59Z","state":"OPEN"}
        ]"#;
        let prs = parse_pull_requests(payload).unwrap();
        assert_eq!(prs.len(), 2);
        assert_eq!(prs[0].number, 7);
        assert_eq!(prs[1].title, "Add docs");
    }

    #[test]
    fn parses_empty_array() {
        assert!(parse_pull_requests(b"[]").unwrap().is_empty());
    }

    #[test]
    fn ignores_extra_fields() {
        let payload =
            br#"[{"number":1,"title":"t","createdAt":"2024-01-02T03:04:05Z","state":"OPEN","url":"x"}]"#;
        assert_eq!(parse_pull_requests(payload).unwrap().len(), 1);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_pull_requests(b"[{\"number\":").unwrap_err();
        assert!(matches!(err, StreamError::Parse(_)));
    }

    #[test]
    fn rejects_wrong_shape() {
        // object instead of array
        assert!(matches!(
            parse_pull_requests(br#"{"number":1}"#),
            Err(StreamError::Parse(_))
        ));
        // missing field
        assert!(matches!(
            parse_pull_requests(br#"[{"number":1,"title":"t","state":"OPEN"}]"#),
            Err(StreamError::Parse(_))
        ));
        // wrong type
        assert!(matches!(
            parse_pull_requests(
                br#"[{"number":"one","title":"t","createdAt":"2024-01-02T03:04:05Z","state":"OPEN"}]"#
            ),
            Err(StreamError::Parse(_))
        ));
    }

    #[test]
    fn gh_error_text_is_a_parse_error() {
        let err = parse_pull_requests(b"GraphQL: Could not resolve to a Repository").unwrap_err();
        assert!(matches!(err, StreamError::Parse(_)));
    }
}
