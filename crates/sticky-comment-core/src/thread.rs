use std::fmt;

use anyhow::Result;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Issue or pull-request comment thread addressed by owner/repository/number.
pub struct ThreadRef {
    pub owner: String,
    pub repository: String,
    pub number: u64,
}

impl fmt::Display for ThreadRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repository, self.number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Comment as read from a thread. Only `id` is used for update and delete.
pub struct Comment {
    pub id: u64,
    pub body: String,
}

#[async_trait]
/// Remote comment thread operations consumed by the locator and reconciler.
pub trait CommentThreadApi: Send + Sync {
    /// Fetch one page (1-based) of up to 100 comments in platform order.
    async fn list_comments(&self, thread: &ThreadRef, page: u32) -> Result<Vec<Comment>>;
    async fn create_comment(&self, thread: &ThreadRef, body: &str) -> Result<Comment>;
    async fn update_comment(&self, thread: &ThreadRef, comment_id: u64, body: &str) -> Result<()>;
    async fn delete_comment(&self, thread: &ThreadRef, comment_id: u64) -> Result<()>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Triggering workflow event reduced to what thread resolution needs.
pub struct TriggerEvent {
    pub name: String,
    /// `pull_request.number` from the payload, when present.
    pub pull_request_number: Option<u64>,
}

impl TriggerEvent {
    pub fn is_pull_request_flavored(&self) -> bool {
        self.name.contains("pull_request")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThreadNumberResolution {
    Resolved(u64),
    Skipped(String),
}

/// Pick the thread number from an explicit override or the triggering event.
pub fn resolve_thread_number(
    explicit: Option<u64>,
    event: &TriggerEvent,
) -> ThreadNumberResolution {
    if let Some(number) = explicit.filter(|number| *number > 0) {
        return ThreadNumberResolution::Resolved(number);
    }
    if !event.is_pull_request_flavored() {
        return ThreadNumberResolution::Skipped(format!(
            "Current context {} is not pull_request, skipping comment",
            event.name
        ));
    }
    match event.pull_request_number {
        Some(number) => ThreadNumberResolution::Resolved(number),
        None => ThreadNumberResolution::Skipped(
            "Could not get pull_request from context, skipping comment".to_string(),
        ),
    }
}
