//! Public site settings exposed to the browser
//!
//! - GET /api/site - Settings derived from the server `Config`

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub site_url: String,
    pub billing_enabled: bool,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_url: "http://localhost:3000".to_string(),
            billing_enabled: false,
        }
    }
}

#[cfg(feature = "ssr")]
impl From<&crate::core::config::Config> for SiteSettings {
    fn from(config: &crate::core::config::Config) -> Self {
        Self {
            site_url: config.site_url.clone(),
            billing_enabled: config.billing_enabled(),
        }
    }
}

/// Build the site settings router
#[cfg(feature = "ssr")]
pub fn site_router(settings: SiteSettings) -> axum::Router {
    use axum::{Json, extract::State, routing::get};

    async fn get_settings(State(settings): State<SiteSettings>) -> Json<SiteSettings> {
        Json(settings)
    }

    axum::Router::new()
        .route("/api/site", get(get_settings))
        .with_state(settings)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::core::config::Config;

    #[test]
    fn test_settings_from_config() {
        let config = Config {
            site_url: "https://visionary.studio".to_string(),
            contact_inbox: Some("hello@visionary.studio".to_string()),
            billing_enabled: true,
        };

        let settings = SiteSettings::from(&config);
        assert_eq!(settings.site_url, "https://visionary.studio");
        assert!(settings.billing_enabled);
    }

    #[test]
    fn test_default_disables_billing() {
        assert!(!SiteSettings::default().billing_enabled);
    }
}
