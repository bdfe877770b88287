use tracing::debug;

use crate::attachment::{AttachmentSource, AttachmentSpec};
use crate::error::StickyCommentError;
use crate::marker::IdentifierMarker;
use crate::mask::mask_secrets;

/// Attachments with more lines than this are folded when they have a title.
pub const COLLAPSE_LINE_THRESHOLD: usize = 36;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Final comment body: masked content followed by the marker line.
pub struct ComposedBody {
    content: String,
    rendered: String,
}

impl ComposedBody {
    fn new(content: String, marker: Option<&IdentifierMarker>) -> Self {
        let marker_line = marker.map(IdentifierMarker::as_str).unwrap_or_default();
        let rendered = format!("{content}\n{marker_line}");
        Self { content, rendered }
    }

    /// Full text posted to the thread.
    pub fn as_str(&self) -> &str {
        &self.rendered
    }

    /// True when there is nothing to show besides the marker.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

fn should_collapse(content: &str) -> bool {
    content.split('\n').count() > COLLAPSE_LINE_THRESHOLD
}

fn render_attachment_block(spec: &AttachmentSpec, content: &str) -> String {
    let collapse = should_collapse(content);
    let mut block = String::new();

    match spec.title.as_deref() {
        Some(title) if collapse => block.push_str(&format!(
            "\n\n<details>\n<summary> 💡 Click to Expand <strong>{title}</strong></summary>\n"
        )),
        Some(title) => block.push_str(&format!("\n\n<strong>{title}</strong>\n")),
        None => block.push('\n'),
    }

    match spec.language.as_deref() {
        Some(language) => block.push_str(&format!("\n```{language}\n{content}\n```")),
        None => block.push_str(&format!("\n{content}")),
    }

    if spec.title.is_some() {
        if collapse {
            block.push_str("\n</details>");
        } else {
            block.push('\n');
        }
    }
    block
}

/// Append attachment blocks to `base_text`, mask the result, then add the marker.
///
/// Attachments are read in order and the first unreadable file aborts the
/// whole composition. The marker is appended after masking so it is never
/// redacted.
pub fn compose_body<S: AsRef<str>>(
    base_text: &str,
    attachments: &[AttachmentSpec],
    mask_patterns: &[S],
    marker: Option<&IdentifierMarker>,
    source: &dyn AttachmentSource,
) -> Result<ComposedBody, StickyCommentError> {
    let mut content = base_text.to_string();
    for spec in attachments {
        if spec.is_empty_slot() {
            continue;
        }
        let file_content = source.read_attachment(&spec.path).map_err(|error| {
            StickyCommentError::Attachment {
                path: spec.path.clone(),
                source: error,
            }
        })?;
        debug!(
            path = %spec.path.display(),
            lines = file_content.split('\n').count(),
            "attaching file to comment body"
        );
        content.push_str(&render_attachment_block(spec, &file_content));
    }

    let masked = mask_secrets(&content, mask_patterns);
    Ok(ComposedBody::new(masked, marker))
}
