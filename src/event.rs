use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use serde_json::Value;

pub fn load_payload(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read event payload: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Event payload is not valid JSON: {}", path.display()))
}

/// `status` event fields. GitHub sends `description` and `target_url` as null
/// for some statuses, so nothing here is assumed present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusEvent {
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub target_url: Option<String>,
}

impl StatusEvent {
    pub fn from_payload(payload: &Value) -> Result<Self> {
        Self::deserialize(payload).context("Event payload is not a status event")
    }

    pub fn context(&self) -> Result<&str> {
        required(self.context.as_deref(), "context")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequestEvent {
    #[serde(default)]
    pub pull_request: Option<PullRequest>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequest {
    #[serde(default)]
    pub head: Option<Head>,
    #[serde(default)]
    pub comments_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Head {
    #[serde(default, rename = "ref")]
    pub ref_name: Option<String>,
}

impl PullRequestEvent {
    pub fn from_payload(payload: &Value) -> Result<Self> {
        Self::deserialize(payload).context("Event payload is not a pull_request event")
    }

    fn pull_request(&self) -> Result<&PullRequest> {
        self.pull_request
            .as_ref()
            .ok_or_else(|| anyhow!("Event payload has no pull_request"))
    }

    pub fn head_ref(&self) -> Result<&str> {
        let head = self
            .pull_request()?
            .head
            .as_ref()
            .ok_or_else(|| anyhow!("Event payload has no pull_request.head"))?;
        required(head.ref_name.as_deref(), "pull_request.head.ref")
    }

    pub fn comments_url(&self) -> Result<&str> {
        required(
            self.pull_request()?.comments_url.as_deref(),
            "pull_request.comments_url",
        )
    }
}

fn required<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str> {
    value.ok_or_else(|| anyhow!("Event payload has no {field}"))
}
