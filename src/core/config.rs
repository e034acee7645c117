//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Canonical URL used when `SITE_URL` is not set
pub const DEFAULT_SITE_URL: &str = "http://localhost:3000";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Public URL of the site, used for canonical links and OG tags
    /// Example: https://visionary.studio
    pub site_url: String,

    /// Inbox that contact form messages are forwarded to
    /// Example: hello@visionary.studio
    pub contact_inbox: Option<String>,

    /// Whether the pricing cards may hand off to the hosted checkout
    pub billing_enabled: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let site_url = lookup("SITE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_SITE_URL.to_string());

        Self {
            site_url,
            contact_inbox: lookup("CONTACT_INBOX").filter(|v| !v.trim().is_empty()),
            billing_enabled: parse_flag(lookup("BILLING_ENABLED").as_deref()),
        }
    }

    /// Check if a contact inbox is configured
    pub fn has_contact_inbox(&self) -> bool {
        self.contact_inbox.is_some()
    }

    /// Check if checkout hand-off is enabled
    pub fn billing_enabled(&self) -> bool {
        self.billing_enabled
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// `true`, `1`, `yes` and `on` (any case) enable a flag
fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("true" | "1" | "yes" | "on")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    // ========================================================================
    // Lookup-based tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_config_with_all_fields() {
        let config = Config::from_lookup(lookup_from(&[
            ("SITE_URL", "https://visionary.studio/"),
            ("CONTACT_INBOX", "hello@visionary.studio"),
            ("BILLING_ENABLED", "true"),
        ]));

        assert_eq!(config.site_url, "https://visionary.studio");
        assert_eq!(
            config.contact_inbox,
            Some("hello@visionary.studio".to_string())
        );
        assert!(config.billing_enabled());
        assert!(config.has_contact_inbox());
    }

    #[test]
    fn test_config_with_no_fields() {
        let config = Config::from_lookup(|_| None);

        assert_eq!(config.site_url, DEFAULT_SITE_URL);
        assert!(config.contact_inbox.is_none());
        assert!(!config.billing_enabled());
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("SITE_URL", "   "),
            ("CONTACT_INBOX", ""),
        ]));

        assert_eq!(config.site_url, DEFAULT_SITE_URL);
        assert!(!config.has_contact_inbox());
    }

    #[test]
    fn test_parse_flag() {
        for on in ["true", "TRUE", "1", "yes", " on "] {
            assert!(parse_flag(Some(on)), "{on} should enable");
        }
        for off in ["false", "0", "no", "", "enabled"] {
            assert!(!parse_flag(Some(off)), "{off} should not enable");
        }
        assert!(!parse_flag(None));
    }
}
