//! Reconcile runtime for sticky comments.
//!
//! Runs the compose → locate → reconcile pipeline against any
//! `CommentThreadApi` and applies the allow-failure policy at the boundary.

pub mod failure_policy;
pub mod locator;
pub mod pipeline;
pub mod reconciler;

#[cfg(test)]
mod test_support;

pub use failure_policy::FailurePolicy;
pub use locator::{find_managed_comments, list_all_comments, COMMENTS_PAGE_SIZE};
pub use pipeline::{execute_from_inputs, run_sticky_comment, RunContext, RunOutcome};
pub use reconciler::apply_reconcile_action;
