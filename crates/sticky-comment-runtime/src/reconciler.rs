use sticky_comment_core::{
    CommentThreadApi, ComposedBody, ReconcileAction, StickyCommentError, ThreadRef,
};
use tracing::info;

use crate::pipeline::RunOutcome;

/// Perform the planned mutation against the thread.
pub async fn apply_reconcile_action(
    api: &dyn CommentThreadApi,
    thread: &ThreadRef,
    action: ReconcileAction,
    body: &ComposedBody,
) -> Result<RunOutcome, StickyCommentError> {
    match action {
        ReconcileAction::Create => {
            let created = api
                .create_comment(thread, body.as_str())
                .await
                .map_err(|error| StickyCommentError::remote("create comment", error))?;
            info!(comment_id = created.id, "Create comment success!");
            Ok(RunOutcome::Created {
                comment_id: created.id,
            })
        }
        ReconcileAction::Update { comment_id } => {
            api.update_comment(thread, comment_id, body.as_str())
                .await
                .map_err(|error| StickyCommentError::remote("update comment", error))?;
            info!("Update comment: [{comment_id}] success!");
            Ok(RunOutcome::Updated { comment_id })
        }
        ReconcileAction::Delete { comment_id } => {
            api.delete_comment(thread, comment_id)
                .await
                .map_err(|error| StickyCommentError::remote("delete comment", error))?;
            info!("Delete comment: [{comment_id}] success!");
            Ok(RunOutcome::Deleted { comment_id })
        }
        ReconcileAction::Ambiguous { matches } => {
            info!("The comments length is {matches}.");
            Ok(RunOutcome::Ambiguous { matches })
        }
    }
}
