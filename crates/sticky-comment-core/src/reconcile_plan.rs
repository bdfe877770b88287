use crate::compose::ComposedBody;
use crate::thread::Comment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Mutation chosen for a thread given the managed comments found on it.
pub enum ReconcileAction {
    Create,
    Update { comment_id: u64 },
    Delete { comment_id: u64 },
    /// Two or more managed comments; nothing is touched.
    Ambiguous { matches: usize },
}

/// Decide the action from the managed comment set and the composed body.
///
/// A single match is deleted when the body is empty or deletion was
/// requested, and updated otherwise. Several matches are never mutated.
pub fn plan_reconcile(
    matches: &[Comment],
    body: &ComposedBody,
    delete_requested: bool,
) -> ReconcileAction {
    match matches {
        [] => ReconcileAction::Create,
        [only] if body.is_empty() || delete_requested => ReconcileAction::Delete {
            comment_id: only.id,
        },
        [only] => ReconcileAction::Update {
            comment_id: only.id,
        },
        many => ReconcileAction::Ambiguous {
            matches: many.len(),
        },
    }
}
