//! Domain layer for sticky pull-request comments.
//! This crate composes comment bodies, masks secrets, recognizes managed
//! comments by their hidden marker, and plans the reconcile action. It does
//! no network I/O; the comment thread is reached through [`CommentThreadApi`].

pub mod attachment;
pub mod compose;
pub mod error;
pub mod inputs;
pub mod marker;
pub mod mask;
pub mod reconcile_plan;
pub mod thread;

pub use attachment::{
    parse_attachment_specs, AttachmentSource, AttachmentSpec, FsAttachmentSource,
};
pub use compose::{compose_body, ComposedBody, COLLAPSE_LINE_THRESHOLD};
pub use error::StickyCommentError;
pub use inputs::{CommentInputs, CommentRequest};
pub use marker::{filter_managed_comments, IdentifierMarker};
pub use mask::{mask_secrets, split_mask_patterns, REDACTION_TOKEN};
pub use reconcile_plan::{plan_reconcile, ReconcileAction};
pub use thread::{
    resolve_thread_number, Comment, CommentThreadApi, ThreadNumberResolution, ThreadRef,
    TriggerEvent,
};
