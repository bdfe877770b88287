use std::{path::Path, sync::Mutex};

use anyhow::Result;
use async_trait::async_trait;
use sticky_comment_core::{
    AttachmentSource, Comment, CommentInputs, CommentThreadApi, IdentifierMarker, ThreadRef,
    TriggerEvent,
};
use sticky_comment_runtime::{execute_from_inputs, find_managed_comments, RunContext, RunOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Mutation {
    Create { body: String },
    Update { comment_id: u64, body: String },
    Delete { comment_id: u64 },
}

struct ScriptedThread {
    comments: Vec<Comment>,
    list_calls: Mutex<usize>,
    mutations: Mutex<Vec<Mutation>>,
}

impl ScriptedThread {
    fn new(comments: Vec<Comment>) -> Self {
        Self {
            comments,
            list_calls: Mutex::new(0),
            mutations: Mutex::new(Vec::new()),
        }
    }

    fn list_calls(&self) -> usize {
        *self.list_calls.lock().expect("list lock")
    }

    fn mutations(&self) -> Vec<Mutation> {
        self.mutations.lock().expect("mutation lock").clone()
    }
}

#[async_trait]
impl CommentThreadApi for ScriptedThread {
    async fn list_comments(&self, _thread: &ThreadRef, page: u32) -> Result<Vec<Comment>> {
        *self.list_calls.lock().expect("list lock") += 1;
        if page > 1 {
            return Ok(Vec::new());
        }
        Ok(self.comments.clone())
    }

    async fn create_comment(&self, _thread: &ThreadRef, body: &str) -> Result<Comment> {
        self.mutations
            .lock()
            .expect("mutation lock")
            .push(Mutation::Create {
                body: body.to_string(),
            });
        Ok(Comment {
            id: 1_000,
            body: body.to_string(),
        })
    }

    async fn update_comment(&self, _thread: &ThreadRef, comment_id: u64, body: &str) -> Result<()> {
        self.mutations
            .lock()
            .expect("mutation lock")
            .push(Mutation::Update {
                comment_id,
                body: body.to_string(),
            });
        Ok(())
    }

    async fn delete_comment(&self, _thread: &ThreadRef, comment_id: u64) -> Result<()> {
        self.mutations
            .lock()
            .expect("mutation lock")
            .push(Mutation::Delete { comment_id });
        Ok(())
    }
}

struct NoAttachments;

impl AttachmentSource for NoAttachments {
    fn read_attachment(&self, path: &Path) -> std::io::Result<String> {
        panic!("unexpected attachment read: {}", path.display());
    }
}

fn pull_request_context() -> RunContext {
    RunContext {
        owner: "octo".to_string(),
        repository: "widgets".to_string(),
        event: TriggerEvent {
            name: "pull_request".to_string(),
            pull_request_number: Some(42),
        },
    }
}

fn inputs(body: &str, identifier: &str) -> CommentInputs {
    CommentInputs {
        body: body.to_string(),
        identifier: identifier.to_string(),
        ..CommentInputs::default()
    }
}

fn comment(id: u64, body: &str) -> Comment {
    Comment {
        id,
        body: body.to_string(),
    }
}

#[tokio::test]
async fn scenario_unmanaged_comment_is_created_without_locating() {
    let thread = ScriptedThread::new(vec![comment(1, "hello\n")]);
    let outcome = execute_from_inputs(
        &inputs("hello", ""),
        &pull_request_context(),
        &NoAttachments,
        &thread,
    )
    .await
    .expect("create");

    assert_eq!(outcome, RunOutcome::Created { comment_id: 1_000 });
    assert_eq!(thread.list_calls(), 0);
    assert_eq!(
        thread.mutations(),
        vec![Mutation::Create {
            body: "hello\n".to_string()
        }]
    );
}

#[tokio::test]
async fn scenario_single_managed_comment_is_updated_in_place() {
    let thread = ScriptedThread::new(vec![
        comment(3, "unrelated"),
        comment(9, "old\n<!-- ci -->"),
    ]);
    let outcome = execute_from_inputs(
        &inputs("new", "ci"),
        &pull_request_context(),
        &NoAttachments,
        &thread,
    )
    .await
    .expect("update");

    assert_eq!(outcome, RunOutcome::Updated { comment_id: 9 });
    assert_eq!(
        thread.mutations(),
        vec![Mutation::Update {
            comment_id: 9,
            body: "new\n<!-- ci -->".to_string()
        }]
    );
}

#[tokio::test]
async fn scenario_empty_body_deletes_single_managed_comment() {
    let thread = ScriptedThread::new(vec![comment(9, "old\n<!-- ci -->")]);
    let outcome = execute_from_inputs(
        &inputs("", "ci"),
        &pull_request_context(),
        &NoAttachments,
        &thread,
    )
    .await
    .expect("delete");

    assert_eq!(outcome, RunOutcome::Deleted { comment_id: 9 });
    assert_eq!(outcome.comment_id(), None);
    assert_eq!(thread.mutations(), vec![Mutation::Delete { comment_id: 9 }]);
}

#[tokio::test]
async fn scenario_duplicate_managed_comments_are_left_untouched() {
    let thread = ScriptedThread::new(vec![
        comment(9, "first\n<!-- ci -->"),
        comment(10, "second\n<!-- ci -->"),
    ]);
    let outcome = execute_from_inputs(
        &inputs("new", "ci"),
        &pull_request_context(),
        &NoAttachments,
        &thread,
    )
    .await
    .expect("ambiguous is not an error");

    assert_eq!(outcome, RunOutcome::Ambiguous { matches: 2 });
    assert!(thread.mutations().is_empty());
}

#[tokio::test]
async fn scenario_composed_marker_locates_its_comment() {
    let request = inputs("status", "X").validate().expect("valid");
    let body = request.compose(&NoAttachments).expect("compose");
    let marker = IdentifierMarker::from_identifier("X").expect("marker");
    assert!(body.as_str().ends_with(marker.as_str()));

    let thread = ScriptedThread::new(vec![
        comment(1, "unrelated"),
        comment(2, body.as_str()),
        comment(3, "<!-- Y -->"),
    ]);
    let thread_ref = ThreadRef {
        owner: "octo".to_string(),
        repository: "widgets".to_string(),
        number: 42,
    };
    let managed = find_managed_comments(&thread, &thread_ref, request.marker.as_ref())
        .await
        .expect("locate");
    assert_eq!(managed, vec![comment(2, body.as_str())]);
}
