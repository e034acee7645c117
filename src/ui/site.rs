//! Public site settings shared by the landing page and pricing cards
//!
//! During server rendering the settings come from the request context; in the
//! browser they are fetched once from `/api/site`.

use leptos::prelude::*;

use crate::core::SiteSettings;

#[derive(Clone, Copy)]
pub struct SiteContext {
    pub settings: RwSignal<SiteSettings>,
}

impl SiteContext {
    pub fn billing_enabled(&self) -> bool {
        self.settings.with(|s| s.billing_enabled)
    }

    /// Absolute URL for a site path
    pub fn url(&self, path: &str) -> String {
        self.settings
            .with(|s| format!("{}{}", s.site_url.trim_end_matches('/'), path))
    }
}

/// Provide site context to the application
pub fn provide_site_context() -> SiteContext {
    let initial = use_context::<SiteSettings>().unwrap_or_default();
    let ctx = SiteContext {
        settings: RwSignal::new(initial),
    };

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::task::spawn_local;

        let settings = ctx.settings;
        spawn_local(async move {
            match crate::ui::api::fetch_site_settings().await {
                Ok(loaded) => {
                    let _ = settings.try_set(loaded);
                }
                Err(e) => leptos::logging::warn!("site settings unavailable: {e}"),
            }
        });
    }

    provide_context(ctx);
    ctx
}

/// Use site context from anywhere in the component tree
pub fn use_site_context() -> SiteContext {
    use_context::<SiteContext>().expect("SiteContext should be provided")
}
