use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
/// Enumerates failure classes surfaced by the sticky comment pipeline.
///
/// Only [`StickyCommentError::Remote`] is eligible for the allow-failure
/// downgrade; configuration and attachment errors always fail the run.
pub enum StickyCommentError {
    #[error("invalid configuration: {0}")]
    Configuration(String),
    #[error("failed to read attachment '{}': {source}", .path.display())]
    Attachment {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("github api {operation} failed: {detail:#}")]
    Remote {
        operation: &'static str,
        detail: anyhow::Error,
    },
}

impl StickyCommentError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn remote(operation: &'static str, detail: anyhow::Error) -> Self {
        Self::Remote { operation, detail }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote { .. })
    }
}
