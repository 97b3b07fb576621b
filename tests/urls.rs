use staging_url_action::branch_name::format_branch_name;
use staging_url_action::comment::render_comment;
use staging_url_action::urls::{deploy_monitor_url, staging_url};

#[test]
fn format_replaces_non_alphanumerics_and_lowercases() {
    assert_eq!(format_branch_name("Feature/ABC_123!!"), "feature-abc-123--");
    assert_eq!(format_branch_name(""), "");
    assert_eq!(
        format_branch_name("dependabot/npm_and_yarn/lodash-4.17.21"),
        "dependabot-npm-and-yarn-lodash-4-17-21"
    );
}

#[test]
fn format_treats_each_non_ascii_char_as_one_dash() {
    assert_eq!(format_branch_name("café"), "caf-");
    assert_eq!(format_branch_name("fix/🚀"), "fix--");
}

#[test]
fn staging_url_substitutes_formatted_branch() {
    assert_eq!(
        staging_url("Feature/ABC_123!!", "{{placeholder}}.staging.example.com"),
        "feature-abc-123--.staging.example.com"
    );
}

#[test]
fn staging_url_without_placeholder_returns_template() {
    assert_eq!(
        staging_url("any/branch", "foo.staging.example.com"),
        "foo.staging.example.com"
    );
}

#[test]
fn staging_url_caps_label_at_63_chars() {
    let branch = "a".repeat(100);
    let url = staging_url(&branch, "{{placeholder}}.staging.example.com");
    assert_eq!(url, format!("{}.staging.example.com", "a".repeat(63)));
}

#[test]
fn staging_url_counts_static_prefix_of_first_label() {
    let branch = "b".repeat(100);
    let url = staging_url(&branch, "web-{{placeholder}}.staging.example.com");
    let label = url.split('.').next().unwrap();
    assert_eq!(label.len(), 63);
    assert_eq!(label, format!("web-{}", "b".repeat(59)));
}

#[test]
fn staging_url_with_oversized_prefix_drops_the_branch() {
    let prefix = "p".repeat(70);
    let template = format!("{prefix}{{{{placeholder}}}}.example.com");
    assert_eq!(
        staging_url("feature/x", &template),
        format!("{prefix}.example.com")
    );
}

#[test]
fn staging_url_only_replaces_first_placeholder() {
    assert_eq!(
        staging_url("main", "{{placeholder}}.example.com/{{placeholder}}"),
        "main.example.com/{{placeholder}}"
    );
}

#[test]
fn deploy_monitor_url_joins_service_and_branch() {
    assert_eq!(
        deploy_monitor_url("release/v2", "checkout"),
        "https://deploymonitor.buffertools.com/release?name=checkout-release-v2"
    );
}

#[test]
fn deploy_monitor_key_is_truncated_to_53_chars() {
    let url = deploy_monitor_url(&"x".repeat(80), "checkout");
    let key = url
        .strip_prefix("https://deploymonitor.buffertools.com/release?name=")
        .unwrap();
    assert_eq!(key.len(), 53);
    assert_eq!(key, format!("checkout-{}", "x".repeat(44)));
}

#[test]
fn deploy_monitor_key_is_not_url_encoded() {
    assert_eq!(
        deploy_monitor_url("main", "my service&co"),
        "https://deploymonitor.buffertools.com/release?name=my service&co-main"
    );
}

#[test]
fn comment_embeds_both_links_and_caveats() {
    let monitor = "https://deploymonitor.buffertools.com/release?name=web-feat-x";
    let body = render_comment("https://feat-x.staging.example.com", monitor);
    assert!(body.contains("* Staging URL: https://feat-x.staging.example.com\n"));
    assert!(body.contains(&format!("* Deployment Monitor URL: {monitor} (*)\n")));
    assert!(body.contains("**bufferbotbrains/cicd-buffer-publish** check below is ✅"));
    assert!(body.contains("(*) Requires VPN."));
}

#[test]
fn comment_keeps_surrounding_whitespace_of_template() {
    let body = render_comment("https://a.example.com", "https://m.example.com");
    assert_eq!(
        body,
        concat!(
            "\n",
            "👋 Hey there! Here are some helpful links related to this PR / branch.\n",
            "\n",
            "* Staging URL: https://a.example.com\n",
            "* Deployment Monitor URL: https://m.example.com (*)\n",
            "\n",
            "_Remember, these won't work until the **bufferbotbrains/cicd-buffer-publish** check \
             below is ✅_\n",
            "\n",
            "(*) Requires VPN.\n",
            "  ",
        )
    );
}
