use std::future::Future;

use anyhow::{anyhow, Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

const USER_AGENT_VALUE: &str = concat!("staging-url-action/", env!("CARGO_PKG_VERSION"));
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Where the pull request comment ends up. [`GithubClient`] is the real one.
pub trait CommentClient {
    fn post_comment(&self, comments_url: &str, body: &str) -> impl Future<Output = Result<Value>>;
}

#[derive(Clone)]
pub struct GithubClient {
    http: Client,
}

#[derive(Debug, Serialize)]
struct CommentRequest<'a> {
    body: &'a str,
}

impl GithubClient {
    pub fn new(token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("x-github-api-version", HeaderValue::from_static(GITHUB_API_VERSION));
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
            .context("repo-token is not a valid header value")?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .context("build github api client")?;
        Ok(Self { http })
    }
}

impl CommentClient for GithubClient {
    async fn post_comment(&self, comments_url: &str, body: &str) -> Result<Value> {
        let response = self
            .http
            .post(comments_url)
            .json(&CommentRequest { body })
            .send()
            .await
            .with_context(|| format!("POST {comments_url} failed"))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .with_context(|| format!("Failed to read response from {comments_url}"))?;
        if !status.is_success() {
            return Err(anyhow!("GitHub returned {status} for {comments_url}: {text}"));
        }
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text)
            .with_context(|| format!("GitHub response from {comments_url} is not JSON"))
    }
}
