/// Status check the staging environment waits on before the links work.
pub const PUBLISH_CHECK_NAME: &str = "bufferbotbrains/cicd-buffer-publish";

/// Markdown body of the pull request comment. The leading newline and the
/// trailing indent are part of the posted text.
pub fn render_comment(staging_url: &str, deploy_monitor_url: &str) -> String {
    format!(
        "
👋 Hey there! Here are some helpful links related to this PR / branch.

* Staging URL: {staging_url}
* Deployment Monitor URL: {deploy_monitor_url} (*)

_Remember, these won't work until the **{PUBLISH_CHECK_NAME}** check below is ✅_

(*) Requires VPN.
  "
    )
}
