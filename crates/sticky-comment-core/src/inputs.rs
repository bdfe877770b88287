use crate::attachment::{parse_attachment_specs, AttachmentSource, AttachmentSpec};
use crate::compose::{compose_body, ComposedBody};
use crate::error::StickyCommentError;
use crate::marker::IdentifierMarker;
use crate::mask::split_mask_patterns;

pub const DEFAULT_MASKS_SPLIT: &str = ",";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Raw action inputs as delivered by the runner, before validation.
pub struct CommentInputs {
    pub body: String,
    pub files: String,
    pub file_types: String,
    pub file_titles: String,
    pub masks: String,
    pub masks_split: String,
    pub identifier: String,
    pub number: String,
    pub delete: bool,
    pub allow_failure: bool,
}

impl Default for CommentInputs {
    fn default() -> Self {
        Self {
            body: String::new(),
            files: String::new(),
            file_types: String::new(),
            file_titles: String::new(),
            masks: String::new(),
            masks_split: DEFAULT_MASKS_SPLIT.to_string(),
            identifier: String::new(),
            number: String::new(),
            delete: false,
            allow_failure: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Validated request driving one reconcile run.
pub struct CommentRequest {
    pub base_text: String,
    pub attachments: Vec<AttachmentSpec>,
    pub mask_patterns: Vec<String>,
    pub marker: Option<IdentifierMarker>,
    pub explicit_number: Option<u64>,
    pub delete_requested: bool,
    pub allow_failure: bool,
}

/// Leading decimal digits of the trimmed input, so `"12abc"` is 12.
/// Blank, zero, signed-negative or digitless values mean no explicit number.
fn parse_explicit_number(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned[..digits_end]
        .parse::<u64>()
        .ok()
        .filter(|number| *number > 0)
}

impl CommentInputs {
    /// Validate every input before any file or network access happens.
    pub fn validate(&self) -> Result<CommentRequest, StickyCommentError> {
        let attachments = parse_attachment_specs(&self.files, &self.file_types, &self.file_titles)?;
        let marker = IdentifierMarker::from_identifier(self.identifier.trim());
        if self.delete && marker.is_none() {
            return Err(StickyCommentError::configuration(
                "identifier is required when delete is true",
            ));
        }

        Ok(CommentRequest {
            base_text: self.body.trim().to_string(),
            attachments,
            mask_patterns: split_mask_patterns(self.masks.trim(), self.masks_split.trim()),
            marker,
            explicit_number: parse_explicit_number(&self.number),
            delete_requested: self.delete,
            allow_failure: self.allow_failure,
        })
    }
}

impl CommentRequest {
    pub fn compose(
        &self,
        source: &dyn AttachmentSource,
    ) -> Result<ComposedBody, StickyCommentError> {
        compose_body(
            &self.base_text,
            &self.attachments,
            &self.mask_patterns,
            self.marker.as_ref(),
            source,
        )
    }
}
