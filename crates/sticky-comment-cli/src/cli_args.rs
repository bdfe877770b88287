use std::path::PathBuf;

use clap::{ArgAction, Parser};
use sticky_comment_core::CommentInputs;

fn parse_positive_usize(value: &str) -> Result<usize, String> {
    let parsed = value
        .parse::<usize>()
        .map_err(|error| format!("failed to parse integer: {error}"))?;
    if parsed == 0 {
        return Err("value must be greater than 0".to_string());
    }
    Ok(parsed)
}

/// Action boolean inputs: anything other than `true` (after trimming) is false.
fn is_enabled(raw: &str) -> bool {
    raw.trim() == "true"
}

fn parse_positive_u64(value: &str) -> Result<u64, String> {
    let parsed = value
        .parse::<u64>()
        .map_err(|error| format!("failed to parse integer: {error}"))?;
    if parsed == 0 {
        return Err("value must be greater than 0".to_string());
    }
    Ok(parsed)
}

#[derive(Debug, Parser)]
#[command(
    name = "sticky-comment",
    about = "Create, update, or delete a single identifiable comment on a pull request",
    version
)]
pub struct Cli {
    #[arg(long, env = "INPUT_BODY", default_value = "", help = "Base comment text")]
    pub body: String,

    #[arg(
        long,
        env = "INPUT_FILES",
        default_value = "",
        help = "Comma-separated files appended to the body"
    )]
    pub files: String,

    #[arg(
        long = "file-types",
        env = "INPUT_FILE-TYPES",
        default_value = "",
        help = "Comma-separated fence languages, one entry per file"
    )]
    pub file_types: String,

    #[arg(
        long = "file-titles",
        env = "INPUT_FILE-TITLES",
        default_value = "",
        help = "Comma-separated section titles, one entry per file"
    )]
    pub file_titles: String,

    #[arg(
        long,
        env = "INPUT_MASKS",
        default_value = "",
        hide_env_values = true,
        help = "Delimited list of secrets replaced with *** in the body"
    )]
    pub masks: String,

    #[arg(
        long = "masks-split",
        env = "INPUT_MASKS-SPLIT",
        default_value = ",",
        help = "Delimiter used to split --masks"
    )]
    pub masks_split: String,

    #[arg(
        long,
        env = "INPUT_IDENTIFIER",
        default_value = "",
        help = "Slot name embedded as a hidden marker; empty posts an unmanaged comment"
    )]
    pub identifier: String,

    #[arg(
        long,
        env = "INPUT_NUMBER",
        default_value = "",
        help = "Issue or pull request number; defaults to the triggering pull request"
    )]
    pub number: String,

    #[arg(
        long,
        env = "INPUT_DELETE",
        default_value = "",
        action = ArgAction::Set,
        help = "Delete the managed comment instead of updating it; only `true` enables it"
    )]
    pub delete: String,

    #[arg(
        long = "allow-failure",
        env = "INPUT_ALLOW-FAILURE",
        default_value = "",
        action = ArgAction::Set,
        help = "Log GitHub API failures instead of failing the run; only `true` enables it"
    )]
    pub allow_failure: String,

    #[arg(
        long,
        env = "INPUT_TOKEN",
        hide_env_values = true,
        help = "GitHub token used for API access"
    )]
    pub token: Option<String>,

    #[arg(
        long = "github-token",
        env = "GITHUB_TOKEN",
        hide_env_values = true,
        help = "Fallback GitHub token when --token is not set"
    )]
    pub github_token: Option<String>,

    #[arg(
        long = "github-api-base",
        env = "GITHUB_API_URL",
        default_value = "https://api.github.com",
        help = "GitHub REST API base URL"
    )]
    pub github_api_base: String,

    #[arg(
        long = "github-repository",
        env = "GITHUB_REPOSITORY",
        help = "Repository in owner/repo format"
    )]
    pub github_repository: Option<String>,

    #[arg(
        long = "github-event-name",
        env = "GITHUB_EVENT_NAME",
        default_value = "",
        help = "Name of the triggering workflow event"
    )]
    pub github_event_name: String,

    #[arg(
        long = "github-event-path",
        env = "GITHUB_EVENT_PATH",
        help = "Path to the triggering event JSON payload"
    )]
    pub github_event_path: Option<PathBuf>,

    #[arg(
        long = "github-output",
        env = "GITHUB_OUTPUT",
        help = "File receiving step outputs (comment-id)"
    )]
    pub github_output: Option<PathBuf>,

    #[arg(
        long = "request-timeout-ms",
        env = "STICKY_COMMENT_REQUEST_TIMEOUT_MS",
        default_value_t = 30_000,
        value_parser = parse_positive_u64,
        help = "Timeout for each GitHub API request in milliseconds"
    )]
    pub request_timeout_ms: u64,

    #[arg(
        long = "retry-max-attempts",
        env = "STICKY_COMMENT_RETRY_MAX_ATTEMPTS",
        default_value_t = 3,
        value_parser = parse_positive_usize,
        help = "Attempts per GitHub API request, including the first"
    )]
    pub retry_max_attempts: usize,

    #[arg(
        long = "retry-base-delay-ms",
        env = "STICKY_COMMENT_RETRY_BASE_DELAY_MS",
        default_value_t = 500,
        value_parser = parse_positive_u64,
        help = "Base delay for exponential retry backoff in milliseconds"
    )]
    pub retry_base_delay_ms: u64,
}

impl Cli {
    pub fn comment_inputs(&self) -> CommentInputs {
        CommentInputs {
            body: self.body.clone(),
            files: self.files.clone(),
            file_types: self.file_types.clone(),
            file_titles: self.file_titles.clone(),
            masks: self.masks.clone(),
            masks_split: self.masks_split.clone(),
            identifier: self.identifier.clone(),
            number: self.number.clone(),
            delete: is_enabled(&self.delete),
            allow_failure: is_enabled(&self.allow_failure),
        }
    }

    /// `--token` wins over `GITHUB_TOKEN`; blank values count as unset.
    pub fn resolved_token(&self) -> Option<String> {
        [self.token.as_deref(), self.github_token.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|token| !token.is_empty())
            .map(ToOwned::to_owned)
    }
}
