use std::fmt;

use crate::thread::Comment;

pub const MARKER_PREFIX: &str = "<!-- ";
pub const MARKER_SUFFIX: &str = " -->";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Hidden HTML comment that tags a comment as owned by one identifier slot.
pub struct IdentifierMarker {
    rendered: String,
}

impl IdentifierMarker {
    /// Build the marker for `identifier`, or `None` when no identifier is set.
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        if identifier.is_empty() {
            return None;
        }
        Some(Self {
            rendered: format!("{MARKER_PREFIX}{identifier}{MARKER_SUFFIX}"),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.rendered
    }

    /// Exact, case-sensitive substring match on the full marker.
    pub fn is_present_in(&self, body: &str) -> bool {
        body.contains(&self.rendered)
    }
}

impl fmt::Display for IdentifierMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

/// Keep only the comments that carry `marker`, preserving thread order.
pub fn filter_managed_comments(comments: Vec<Comment>, marker: &IdentifierMarker) -> Vec<Comment> {
    comments
        .into_iter()
        .filter(|comment| marker.is_present_in(&comment.body))
        .collect()
}
