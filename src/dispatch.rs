use anyhow::Result;
use serde_json::Value;
use tracing::{debug, info};

use crate::comment::render_comment;
use crate::event::{PullRequestEvent, StatusEvent};
use crate::github::CommentClient;
use crate::urls::{deploy_monitor_url, staging_url};

/// Status context prefix of the CI/CD pipeline that deploys staging.
pub const DEPLOY_CONTEXT_PREFIX: &str = "bufferbotbrains/cicd";
pub const DEPLOYED_DESCRIPTION: &str = "Build successfully deployed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    GetStagingUrlWhenDeployed,
    PrComment,
}

impl Action {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "get-staging-url-when-deployed" => Some(Self::GetStagingUrlWhenDeployed),
            "pr-comment" => Some(Self::PrComment),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Inputs {
    pub action: String,
    pub staging_url_template: String,
    pub service_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The deploy status succeeded; value is its `target_url`.
    StagingUrl(String),
    Commented,
    Skipped,
}

pub async fn dispatch<C: CommentClient>(
    inputs: &Inputs,
    payload: &Value,
    client: &C,
) -> Result<Outcome> {
    let Some(action) = Action::parse(&inputs.action) else {
        debug!(action = %inputs.action, "unrecognized action, nothing to do");
        return Ok(Outcome::Skipped);
    };

    match action {
        Action::GetStagingUrlWhenDeployed => staging_url_when_deployed(payload),
        Action::PrComment => pr_comment(inputs, payload, client).await,
    }
}

fn staging_url_when_deployed(payload: &Value) -> Result<Outcome> {
    let status = StatusEvent::from_payload(payload)?;
    let context = status.context()?;
    let state = status.state.as_deref();
    let description = status.description.as_deref().unwrap_or_default();

    if context.starts_with(DEPLOY_CONTEXT_PREFIX)
        && state == Some("success")
        && description.contains(DEPLOYED_DESCRIPTION)
    {
        // A success status without a link still sets the output, just empty.
        let target_url = status.target_url.clone().unwrap_or_default();
        info!(context, target_url = %target_url, "staging deploy succeeded");
        return Ok(Outcome::StagingUrl(target_url));
    }

    debug!(context, ?state, description, "status is not a successful deploy");
    Ok(Outcome::Skipped)
}

async fn pr_comment<C: CommentClient>(
    inputs: &Inputs,
    payload: &Value,
    client: &C,
) -> Result<Outcome> {
    let event = PullRequestEvent::from_payload(payload)?;
    let branch_name = event.head_ref()?;
    let comments_url = event.comments_url()?;

    let staging = staging_url(branch_name, &inputs.staging_url_template);
    let monitor = deploy_monitor_url(branch_name, &inputs.service_name);
    info!(
        branch = branch_name,
        staging_url = %staging,
        deploy_monitor_url = %monitor,
        "posting links"
    );

    let body = render_comment(&staging, &monitor);
    let response = client.post_comment(comments_url, &body).await?;
    info!(%response, "posted pull request comment");
    Ok(Outcome::Commented)
}
