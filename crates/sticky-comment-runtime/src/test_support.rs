use std::sync::Mutex;

use anyhow::{bail, Result};
use async_trait::async_trait;
use sticky_comment_core::{Comment, CommentThreadApi, ThreadRef};

use crate::locator::COMMENTS_PAGE_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ThreadCall {
    List { page: u32 },
    Create { body: String },
    Update { comment_id: u64, body: String },
    Delete { comment_id: u64 },
}

/// In-memory thread that records every call made against it.
pub(crate) struct RecordingThread {
    comments: Vec<Comment>,
    calls: Mutex<Vec<ThreadCall>>,
    failing_operation: Option<&'static str>,
    next_id: u64,
}

impl RecordingThread {
    pub(crate) fn new(comments: Vec<Comment>) -> Self {
        Self {
            comments,
            calls: Mutex::new(Vec::new()),
            failing_operation: None,
            next_id: 5_000,
        }
    }

    pub(crate) fn failing_on(mut self, operation: &'static str) -> Self {
        self.failing_operation = Some(operation);
        self
    }

    pub(crate) fn calls(&self) -> Vec<ThreadCall> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub(crate) fn mutations(&self) -> Vec<ThreadCall> {
        self.calls()
            .into_iter()
            .filter(|call| !matches!(call, ThreadCall::List { .. }))
            .collect()
    }

    fn record(&self, operation: &'static str, call: ThreadCall) -> Result<()> {
        self.calls.lock().expect("calls lock").push(call);
        if self.failing_operation == Some(operation) {
            bail!("injected {operation} failure");
        }
        Ok(())
    }
}

pub(crate) fn comment(id: u64, body: &str) -> Comment {
    Comment {
        id,
        body: body.to_string(),
    }
}

pub(crate) fn thread() -> ThreadRef {
    ThreadRef {
        owner: "octo".to_string(),
        repository: "widgets".to_string(),
        number: 42,
    }
}

#[async_trait]
impl CommentThreadApi for RecordingThread {
    async fn list_comments(&self, _thread: &ThreadRef, page: u32) -> Result<Vec<Comment>> {
        self.record("list", ThreadCall::List { page })?;
        let start = (page.saturating_sub(1) as usize) * COMMENTS_PAGE_SIZE;
        Ok(self
            .comments
            .iter()
            .skip(start)
            .take(COMMENTS_PAGE_SIZE)
            .cloned()
            .collect())
    }

    async fn create_comment(&self, _thread: &ThreadRef, body: &str) -> Result<Comment> {
        self.record(
            "create",
            ThreadCall::Create {
                body: body.to_string(),
            },
        )?;
        Ok(comment(self.next_id, body))
    }

    async fn update_comment(&self, _thread: &ThreadRef, comment_id: u64, body: &str) -> Result<()> {
        self.record(
            "update",
            ThreadCall::Update {
                comment_id,
                body: body.to_string(),
            },
        )
    }

    async fn delete_comment(&self, _thread: &ThreadRef, comment_id: u64) -> Result<()> {
        self.record("delete", ThreadCall::Delete { comment_id })
    }
}
