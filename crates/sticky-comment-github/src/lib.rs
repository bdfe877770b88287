//! GitHub transport for sticky comments.
//! Provides the REST implementation of `CommentThreadApi`, the retry policy
//! shared by its requests, and loading of the Actions event context.

pub mod action_context;
pub mod comments_client;
pub mod transport_retry;

pub use action_context::{load_trigger_event, RepoSlug};
pub use comments_client::{GithubCommentsClient, GithubCommentsClientConfig};
pub use transport_retry::RetryPolicy;
