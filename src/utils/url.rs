//! URL utilities for consistent URL handling
//!
//! Stream URLs end up in log lines and error messages, so anything that looks
//! like a credential is masked before it is printed.

use std::sync::OnceLock;

use regex::Regex;
use url::Url;

/// URL utilities for consistent URL handling
pub struct UrlUtils;

impl UrlUtils {
    /// Obfuscate credentials in URLs and free-form messages containing URLs
    ///
    /// Handles `user:pass@host` userinfo and common credential query
    /// parameters. Strings that are not URLs are still scanned for the query
    /// parameters so that error messages embedding a URL are masked too.
    pub fn obfuscate_credentials(url: &str) -> String {
        let mut obfuscated = url.to_string();

        if let Ok(parsed) = Url::parse(url)
            && (!parsed.username().is_empty() || parsed.password().is_some())
        {
            let mut new_url = parsed.clone();
            let _ = new_url.set_username("****");
            let _ = new_url.set_password(Some("****"));
            obfuscated = new_url.to_string();
        }

        sensitive_query_regex()
            .replace_all(&obfuscated, "${1}****")
            .into_owned()
    }
}

fn sensitive_query_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)([?&](?:username|password|user|pass|pwd|passwd|token)=)[^&\s]*")
            .expect("credential pattern is valid")
    })
}
