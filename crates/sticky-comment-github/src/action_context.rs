use std::path::Path;

use serde::Deserialize;
use sticky_comment_core::{StickyCommentError, TriggerEvent};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Repository addressed as `owner/repo`.
pub struct RepoSlug {
    pub owner: String,
    pub name: String,
}

impl RepoSlug {
    pub fn parse(raw: &str) -> Result<Self, StickyCommentError> {
        let invalid = || {
            StickyCommentError::configuration(format!(
                "invalid repository '{raw}', expected owner/repo"
            ))
        };
        let (owner, name) = raw.trim().split_once('/').ok_or_else(invalid)?;
        let owner = owner.trim();
        let name = name.trim();
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }
        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
struct EventPayload {
    #[serde(default)]
    pull_request: Option<PullRequestPayload>,
}

#[derive(Debug, Deserialize)]
struct PullRequestPayload {
    number: u64,
}

/// Read the triggering event from `GITHUB_EVENT_NAME` / `GITHUB_EVENT_PATH` values.
///
/// A missing payload file yields an event without a pull request; a payload
/// that exists but is not valid JSON is a configuration error.
pub fn load_trigger_event(
    event_name: &str,
    event_path: Option<&Path>,
) -> Result<TriggerEvent, StickyCommentError> {
    let payload = match event_path {
        Some(path) if path.is_file() => {
            let raw = std::fs::read_to_string(path).map_err(|error| {
                StickyCommentError::configuration(format!(
                    "failed to read event payload {}: {error}",
                    path.display()
                ))
            })?;
            serde_json::from_str::<EventPayload>(&raw).map_err(|error| {
                StickyCommentError::configuration(format!(
                    "failed to parse event payload {}: {error}",
                    path.display()
                ))
            })?
        }
        Some(path) => {
            debug!(path = %path.display(), "event payload file not found");
            EventPayload::default()
        }
        None => EventPayload::default(),
    };

    Ok(TriggerEvent {
        name: event_name.trim().to_string(),
        pull_request_number: payload.pull_request.map(|pull_request| pull_request.number),
    })
}
