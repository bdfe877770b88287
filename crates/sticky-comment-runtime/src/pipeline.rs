use sticky_comment_core::{
    plan_reconcile, resolve_thread_number, AttachmentSource, CommentInputs, CommentRequest,
    CommentThreadApi, StickyCommentError, ThreadNumberResolution, ThreadRef, TriggerEvent,
};
use tracing::info;

use crate::failure_policy::FailurePolicy;
use crate::locator::find_managed_comments;
use crate::reconciler::apply_reconcile_action;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Repository and triggering event the run executes in.
pub struct RunContext {
    pub owner: String,
    pub repository: String,
    pub event: TriggerEvent,
}

impl RunContext {
    fn thread(&self, number: u64) -> ThreadRef {
        ThreadRef {
            owner: self.owner.clone(),
            repository: self.repository.clone(),
            number,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Result of one invocation.
pub enum RunOutcome {
    Created { comment_id: u64 },
    Updated { comment_id: u64 },
    /// The managed comment was removed; no comment is present afterwards.
    Deleted { comment_id: u64 },
    Ambiguous { matches: usize },
    Skipped { reason: String },
    /// A remote failure was logged and downgraded by allow-failure.
    FailureSuppressed { message: String },
}

impl RunOutcome {
    /// Handle published as the `comment-id` output.
    pub fn comment_id(&self) -> Option<u64> {
        match self {
            Self::Created { comment_id } | Self::Updated { comment_id } => Some(*comment_id),
            _ => None,
        }
    }
}

/// Compose the body, locate the managed comment, and reconcile it.
pub async fn run_sticky_comment(
    request: &CommentRequest,
    context: &RunContext,
    source: &dyn AttachmentSource,
    api: &dyn CommentThreadApi,
) -> Result<RunOutcome, StickyCommentError> {
    let body = request.compose(source)?;

    let number = match resolve_thread_number(request.explicit_number, &context.event) {
        ThreadNumberResolution::Resolved(number) => number,
        ThreadNumberResolution::Skipped(reason) => {
            info!("{reason}");
            return Ok(RunOutcome::Skipped { reason });
        }
    };
    let thread = context.thread(number);
    info!("Commenting on PR: {thread}");

    let matches = find_managed_comments(api, &thread, request.marker.as_ref()).await?;
    let action = plan_reconcile(&matches, &body, request.delete_requested);
    apply_reconcile_action(api, &thread, action, &body).await
}

/// Validate raw inputs, run the pipeline, and apply the failure policy once.
pub async fn execute_from_inputs(
    inputs: &CommentInputs,
    context: &RunContext,
    source: &dyn AttachmentSource,
    api: &dyn CommentThreadApi,
) -> Result<RunOutcome, StickyCommentError> {
    let request = inputs.validate()?;
    let policy = FailurePolicy::from_allow_failure(request.allow_failure);
    policy.settle(run_sticky_comment(&request, context, source, api).await)
}
