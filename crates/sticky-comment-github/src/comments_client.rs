use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use sticky_comment_core::{Comment, CommentThreadApi, ThreadRef};
use tracing::{debug, warn};

use crate::transport_retry::{
    is_retryable_status, is_retryable_transport_error, parse_retry_after, truncate_for_error,
    RetryPolicy,
};

const USER_AGENT: &str = "sticky-comment";
const GITHUB_API_VERSION: &str = "2022-11-28";
const COMMENTS_PER_PAGE: &str = "100";
const ERROR_BODY_MAX_CHARS: usize = 800;

#[derive(Debug, Clone)]
pub struct GithubCommentsClientConfig {
    pub api_base: String,
    pub token: String,
    pub request_timeout_ms: u64,
    pub retry: RetryPolicy,
}

#[derive(Debug, Deserialize)]
struct GithubIssueComment {
    id: u64,
    #[serde(default)]
    body: Option<String>,
}

impl From<GithubIssueComment> for Comment {
    fn from(raw: GithubIssueComment) -> Self {
        Self {
            id: raw.id,
            body: raw.body.unwrap_or_default(),
        }
    }
}

#[derive(Clone)]
/// Issue comment endpoints of the GitHub REST API.
pub struct GithubCommentsClient {
    http: reqwest::Client,
    api_base: String,
    retry: RetryPolicy,
}

impl GithubCommentsClient {
    pub fn new(config: GithubCommentsClientConfig) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static(USER_AGENT),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            reqwest::header::HeaderValue::from_static(GITHUB_API_VERSION),
        );
        let token = config.token.trim();
        if !token.is_empty() {
            let mut auth_header = reqwest::header::HeaderValue::from_str(&format!("Bearer {token}"))
                .context("invalid github authorization header")?;
            auth_header.set_sensitive(true);
            headers.insert(reqwest::header::AUTHORIZATION, auth_header);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.request_timeout_ms.max(1)))
            .build()
            .context("failed to create github api client")?;
        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            retry: config.retry,
        })
    }

    fn thread_comments_url(&self, thread: &ThreadRef) -> String {
        format!(
            "{}/repos/{}/{}/issues/{}/comments",
            self.api_base, thread.owner, thread.repository, thread.number
        )
    }

    fn comment_url(&self, thread: &ThreadRef, comment_id: u64) -> String {
        format!(
            "{}/repos/{}/{}/issues/comments/{}",
            self.api_base, thread.owner, thread.repository, comment_id
        )
    }

    /// Send with retries and return the first successful response.
    async fn send<F>(&self, operation: &str, mut request_builder: F) -> Result<reqwest::Response>
    where
        F: FnMut() -> reqwest::RequestBuilder,
    {
        let mut attempt = 0_usize;
        loop {
            attempt = attempt.saturating_add(1);
            match request_builder().send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }

                    let retry_after = parse_retry_after(response.headers());
                    let body = response.text().await.unwrap_or_default();
                    if self.retry.has_attempts_left(attempt)
                        && is_retryable_status(status.as_u16())
                    {
                        let delay = self.retry.delay_for(attempt, retry_after);
                        warn!(
                            operation,
                            status = status.as_u16(),
                            attempt,
                            delay_ms = delay.as_millis() as u64,
                            "retrying github request"
                        );
                        tokio::time::sleep(delay).await;
                        continue;
                    }

                    bail!(
                        "{operation} returned status {}: {}",
                        status.as_u16(),
                        truncate_for_error(&body, ERROR_BODY_MAX_CHARS)
                    );
                }
                Err(error) => {
                    if self.retry.has_attempts_left(attempt) && is_retryable_transport_error(&error)
                    {
                        let delay = self.retry.delay_for(attempt, None);
                        warn!(
                            operation,
                            attempt,
                            %error,
                            "retrying github request after transport error"
                        );
                        tokio::time::sleep(delay).await;
                        continue;
                    }
                    return Err(error).with_context(|| format!("{operation} request error"));
                }
            }
        }
    }

    async fn request_json<T, F>(&self, operation: &str, request_builder: F) -> Result<T>
    where
        T: DeserializeOwned,
        F: FnMut() -> reqwest::RequestBuilder,
    {
        self.send(operation, request_builder)
            .await?
            .json::<T>()
            .await
            .with_context(|| format!("failed to decode github {operation} response"))
    }
}

#[async_trait]
impl CommentThreadApi for GithubCommentsClient {
    async fn list_comments(&self, thread: &ThreadRef, page: u32) -> Result<Vec<Comment>> {
        let url = self.thread_comments_url(thread);
        let page_value = page.to_string();
        debug!(thread = %thread, page, "listing issue comments");
        let rows: Vec<GithubIssueComment> = self
            .request_json("list issue comments", || {
                self.http.get(&url).query(&[
                    ("per_page", COMMENTS_PER_PAGE),
                    ("page", page_value.as_str()),
                ])
            })
            .await?;
        Ok(rows.into_iter().map(Comment::from).collect())
    }

    async fn create_comment(&self, thread: &ThreadRef, body: &str) -> Result<Comment> {
        let url = self.thread_comments_url(thread);
        let payload = json!({ "body": body });
        let created: GithubIssueComment = self
            .request_json("create issue comment", || self.http.post(&url).json(&payload))
            .await?;
        Ok(created.into())
    }

    async fn update_comment(&self, thread: &ThreadRef, comment_id: u64, body: &str) -> Result<()> {
        let url = self.comment_url(thread, comment_id);
        let payload = json!({ "body": body });
        self.send("update issue comment", || self.http.patch(&url).json(&payload))
            .await?;
        Ok(())
    }

    async fn delete_comment(&self, thread: &ThreadRef, comment_id: u64) -> Result<()> {
        let url = self.comment_url(thread, comment_id);
        self.send("delete issue comment", || self.http.delete(&url))
            .await?;
        Ok(())
    }
}
