//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::ui::common::{MeshGradient, NoiseOverlay};
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page Not Found - Visionary Studio" />

        <div class="min-h-screen bg-black relative overflow-hidden flex flex-col items-center justify-center p-4">
            <MeshGradient />
            <NoiseOverlay />

            <div class="relative z-10 text-center">
                <div class="w-24 h-24 mx-auto mb-6 rounded-full bg-white/5 border border-white/10 flex items-center justify-center">
                    <Icon name=icons::IMAGE class="w-12 h-12" />
                </div>

                // Error code
                <h1 class="text-7xl font-black mb-4 bg-gradient-to-r from-orange-400 via-pink-500 to-violet-500 bg-clip-text text-transparent">
                    "404"
                </h1>
                <h2 class="text-2xl font-semibold text-white mb-2">"Page Not Found"</h2>
                <p class="text-gray-400 mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <A
                        href="/"
                        attr:class="px-6 py-3 rounded-xl bg-gradient-to-r from-orange-500 to-pink-500 text-white font-semibold"
                    >
                        "Go Home"
                    </A>
                    <A
                        href="/dashboard"
                        attr:class="px-6 py-3 rounded-xl border border-white/10 bg-white/5 hover:bg-white/10 text-white font-medium transition-colors"
                    >
                        "My Projects"
                    </A>
                </div>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-gray-600">"© 2025 Visionary Studio"</p>
            </div>
        </div>
    }
}
