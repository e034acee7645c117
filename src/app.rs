use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::{ParamSegment, StaticSegment};

use crate::ui::pages::{DashboardPage, EditorPage, LandingPage, NotFoundPage};
use crate::ui::{Header, provide_motion_config, provide_overlay_context, provide_site_context};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="bg-black">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Site-wide contexts: animation timings, open overlays, public settings
    provide_motion_config();
    provide_overlay_context();
    provide_site_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/visionary-studio.css"/>

        // Default title; pages override it
        <Title text="Visionary Studio"/>

        <Router>
            <Header />
            <main>
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=(StaticSegment("editor"), ParamSegment("project_id")) view=EditorPage/>
                </Routes>
            </main>
        </Router>
    }
}
