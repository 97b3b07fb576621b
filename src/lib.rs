pub mod comment;
pub mod dispatch;
pub mod event;
pub mod github;
pub mod outputs;

pub mod branch_name {
    /// Lowercase `branch_name`, replacing every char that is not an ASCII
    /// letter or digit with `-`.
    ///
    /// Works per `char`, so the output has exactly as many chars as the input.
    /// The output is ASCII, which makes its byte length equal to that count too.
    pub fn format_branch_name(branch_name: &str) -> String {
        let out: String = branch_name
            .chars()
            .map(|ch| {
                if ch.is_ascii_alphanumeric() {
                    ch.to_ascii_lowercase()
                } else {
                    '-'
                }
            })
            .collect();
        debug_assert!(is_formatted(&out));
        out
    }

    pub fn is_formatted(token: &str) -> bool {
        token
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
    }
}

pub mod urls {
    use crate::branch_name::format_branch_name;

    pub const PLACEHOLDER: &str = "{{placeholder}}";
    pub const MAX_SUBDOMAIN_LENGTH: usize = 63;
    pub const MAX_DEPLOY_MONITOR_LENGTH: usize = 53;
    pub const DEPLOY_MONITOR_BASE_URL: &str = "https://deploymonitor.buffertools.com/release?name=";

    /// Substitute the formatted branch into `template`, keeping the first
    /// hostname label within the DNS limit. A template without the
    /// placeholder comes back unchanged.
    pub fn staging_url(branch_name: &str, template: &str) -> String {
        let formatted = format_branch_name(branch_name);

        let without_placeholder = template.replacen(PLACEHOLDER, "", 1);
        let first_label_len = without_placeholder
            .split('.')
            .next()
            .unwrap_or_default()
            .chars()
            .count();
        let max_len = MAX_SUBDOMAIN_LENGTH.saturating_sub(first_label_len);

        template.replacen(PLACEHOLDER, truncate_chars(&formatted, max_len), 1)
    }

    /// Deploy monitor release link. The key is not URL-encoded.
    pub fn deploy_monitor_url(branch_name: &str, service_name: &str) -> String {
        let key = format!("{service_name}-{}", format_branch_name(branch_name));
        let key = truncate_chars(&key, MAX_DEPLOY_MONITOR_LENGTH);
        format!("{DEPLOY_MONITOR_BASE_URL}{key}")
    }

    fn truncate_chars(s: &str, max_chars: usize) -> &str {
        match s.char_indices().nth(max_chars) {
            Some((idx, _)) => &s[..idx],
            None => s,
        }
    }
}
