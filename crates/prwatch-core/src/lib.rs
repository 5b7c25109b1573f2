pub mod error;
pub mod pull_request;
pub mod render;
pub mod source;

pub use error::StreamError;
pub use pull_request::PullRequest;
pub use source::PullRequestSource;
