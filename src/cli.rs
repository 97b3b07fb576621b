use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use tracing::warn;

use staging_url_action::dispatch::{dispatch, Inputs, Outcome};
use staging_url_action::event::load_payload;
use staging_url_action::github::GithubClient;
use staging_url_action::outputs::set_output;
use staging_url_action::urls::{deploy_monitor_url, staging_url};

pub(crate) const STAGING_URL_OUTPUT: &str = "stagingUrl";

#[derive(Parser, Debug)]
#[command(
    name = "staging-url",
    version,
    about = "Derive staging and deploy monitor URLs for a branch (GitHub Action)",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[command(flatten)]
    run: RunArgs,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the staging URL for a branch
    StagingUrl(StagingUrlArgs),
    /// Print the deploy monitor URL for a branch
    DeployMonitorUrl(DeployMonitorUrlArgs),
}

/// Action inputs. The runner exposes `with:` values as `INPUT_<NAME>`.
#[derive(Args, Debug)]
struct RunArgs {
    /// `get-staging-url-when-deployed` or `pr-comment`; anything else is a no-op
    #[arg(long, env = "INPUT_ACTION", default_value = "")]
    action: String,
    #[arg(long, env = "INPUT_REPO-TOKEN", default_value = "", hide_env_values = true)]
    repo_token: String,
    /// Must contain `{{placeholder}}`
    #[arg(long, env = "INPUT_STAGING-URL-TEMPLATE", default_value = "")]
    staging_url_template: String,
    #[arg(long, env = "INPUT_SERVICE-NAME", default_value = "")]
    service_name: String,
    /// JSON payload of the triggering event
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    event_path: Option<PathBuf>,
    /// File the runner collects step outputs from
    #[arg(long, env = "GITHUB_OUTPUT")]
    output_path: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct StagingUrlArgs {
    branch_name: String,
    /// URL template containing `{{placeholder}}`
    #[arg(long)]
    template: String,
}

#[derive(Args, Debug)]
struct DeployMonitorUrlArgs {
    branch_name: String,
    #[arg(long)]
    service_name: String,
}

pub(crate) async fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Some(Commands::StagingUrl(a)) => {
            println!("{}", staging_url(&a.branch_name, &a.template));
            Ok(())
        }
        Some(Commands::DeployMonitorUrl(a)) => {
            println!("{}", deploy_monitor_url(&a.branch_name, &a.service_name));
            Ok(())
        }
        None => run_action(cli.run).await,
    }
}

async fn run_action(args: RunArgs) -> Result<()> {
    let inputs = Inputs {
        action: args.action.trim().to_string(),
        staging_url_template: args.staging_url_template.trim().to_string(),
        service_name: args.service_name.trim().to_string(),
    };

    let payload = match &args.event_path {
        Some(path) => load_payload(path)?,
        None => {
            warn!("GITHUB_EVENT_PATH is not set; using an empty event payload");
            Value::Null
        }
    };

    let client = GithubClient::new(args.repo_token.trim())?;
    if let Outcome::StagingUrl(url) = dispatch(&inputs, &payload, &client).await? {
        set_output(STAGING_URL_OUTPUT, &url, args.output_path.as_deref())?;
    }
    Ok(())
}
