#![recursion_limit = "4096"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::logging::log;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;
    use visionary_studio::app::*;
    use visionary_studio::core::SiteSettings;
    use visionary_studio::core::config::Config;
    use visionary_studio::core::contact::api::ContactApiState;
    use visionary_studio::core::contact::contact_router;
    use visionary_studio::core::projects::{ProjectApiState, ProjectStore, project_router};
    use visionary_studio::core::site::site_router;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load application config from environment variables
    let config = Config::from_env();

    tracing::info!(
        "Config loaded: site_url={}, contact_inbox={}, billing_enabled={}",
        config.site_url,
        config.has_contact_inbox(),
        config.billing_enabled()
    );

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = get_configuration(None).unwrap();
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    // Settings rendered into the page on the server and served to the browser
    let site_settings = SiteSettings::from(&config);

    // Create ServeDir for pkg with pre-compressed file support
    // This serves .br (brotli) and .gz (gzip) files automatically
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    // Build the Leptos router
    let leptos_router = Router::new()
        // Serve pre-compressed static assets from /pkg
        .nest_service("/pkg", pkg_service)
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let site_settings = site_settings.clone();
                move || provide_context(site_settings.clone())
            },
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    // Build the main application router with compression
    let app = Router::new()
        // REST API
        .merge(site_router(site_settings))
        .merge(project_router(ProjectApiState::new(ProjectStore::new())))
        .merge(contact_router(ContactApiState::new(config.contact_inbox.clone())))
        // Leptos routes (nested to avoid state conflicts)
        .merge(leptos_router)
        // Add compression with Brotli priority (best compression for web)
        // Compresses responses > 1KB, skips already compressed formats
        .layer(
            CompressionLayer::new()
                .br(true) // Brotli - best compression ratio
                .gzip(true) // Gzip - wide support fallback
                .quality(CompressionLevel::Best),
        );

    log!("listening on http://{}", &addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
