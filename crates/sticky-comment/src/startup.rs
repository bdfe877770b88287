use anyhow::{Context, Result};
use sticky_comment_cli::Cli;
use sticky_comment_core::{FsAttachmentSource, StickyCommentError};
use sticky_comment_github::{
    load_trigger_event, GithubCommentsClient, GithubCommentsClientConfig, RepoSlug, RetryPolicy,
};
use sticky_comment_runtime::{execute_from_inputs, RunContext};
use tracing::warn;

use crate::action_output::publish_comment_id;

fn build_run_context(cli: &Cli) -> Result<RunContext, StickyCommentError> {
    let raw_repository = cli.github_repository.as_deref().ok_or_else(|| {
        StickyCommentError::configuration("GITHUB_REPOSITORY (or --github-repository) is required")
    })?;
    let repository = RepoSlug::parse(raw_repository)?;
    let event = load_trigger_event(&cli.github_event_name, cli.github_event_path.as_deref())?;
    Ok(RunContext {
        owner: repository.owner,
        repository: repository.name,
        event,
    })
}

fn build_comments_client(cli: &Cli) -> Result<GithubCommentsClient> {
    let token = cli.resolved_token().unwrap_or_else(|| {
        warn!("no GitHub token configured; API requests will be unauthenticated");
        String::new()
    });
    GithubCommentsClient::new(GithubCommentsClientConfig {
        api_base: cli.github_api_base.clone(),
        token,
        request_timeout_ms: cli.request_timeout_ms,
        retry: RetryPolicy::new(cli.retry_max_attempts, cli.retry_base_delay_ms),
    })
}

pub(crate) async fn run_cli(cli: Cli) -> Result<()> {
    let inputs = cli.comment_inputs();
    let context = build_run_context(&cli)?;
    let client = build_comments_client(&cli)?;

    let outcome = execute_from_inputs(&inputs, &context, &FsAttachmentSource, &client).await?;
    if let Some(comment_id) = outcome.comment_id() {
        publish_comment_id(cli.github_output.as_deref(), comment_id)
            .context("failed to publish comment-id output")?;
    }
    Ok(())
}
