use std::path::{Path, PathBuf};

use crate::error::StickyCommentError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One file attached below the base comment text.
pub struct AttachmentSpec {
    pub path: PathBuf,
    /// Fence language used for syntax highlighting.
    pub language: Option<String>,
    /// Section heading; long content with a title is folded.
    pub title: Option<String>,
}

impl AttachmentSpec {
    /// Empty slots come from blank entries in the comma-delimited list.
    pub fn is_empty_slot(&self) -> bool {
        self.path.as_os_str().is_empty()
    }
}

/// Source of attachment file contents.
pub trait AttachmentSource {
    fn read_attachment(&self, path: &Path) -> std::io::Result<String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Reads attachments from the local filesystem.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD rather than failing the read.
pub struct FsAttachmentSource;

impl AttachmentSource for FsAttachmentSource {
    fn read_attachment(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read(path).map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Entries are trimmed individually, so `"a.log, b.log"` names `b.log`.
fn split_list(raw: &str) -> Vec<&str> {
    raw.split(',').map(str::trim).collect()
}

fn non_empty(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Zip the parallel `files`, `file-types` and `file-titles` lists.
///
/// Each list is split on `,` independently (an empty input is one empty
/// entry), and all three must have the same number of entries.
pub fn parse_attachment_specs(
    files: &str,
    file_types: &str,
    file_titles: &str,
) -> Result<Vec<AttachmentSpec>, StickyCommentError> {
    let paths = split_list(files);
    let languages = split_list(file_types);
    let titles = split_list(file_titles);
    if paths.len() != languages.len() || paths.len() != titles.len() {
        return Err(StickyCommentError::configuration(format!(
            "files({}), file-types({}) and file-titles({}) must have the same length",
            paths.len(),
            languages.len(),
            titles.len()
        )));
    }

    Ok(paths
        .into_iter()
        .zip(languages)
        .zip(titles)
        .map(|((path, language), title)| AttachmentSpec {
            path: PathBuf::from(path),
            language: non_empty(language),
            title: non_empty(title),
        })
        .collect())
}
