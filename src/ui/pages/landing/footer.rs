use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::FOOTER_LINKS;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="relative overflow-hidden bg-gradient-to-b from-slate-900 via-slate-900 to-black border-t border-white/5">
            <div class="absolute inset-0 pointer-events-none" aria-hidden="true">
                <div class="absolute bottom-0 left-1/4 w-96 h-96 bg-gradient-to-t from-orange-600/10 to-transparent rounded-full blur-3xl"></div>
                <div class="absolute bottom-0 right-1/4 w-96 h-96 bg-gradient-to-t from-violet-600/10 to-transparent rounded-full blur-3xl"></div>
            </div>

            <div class="relative z-10 max-w-7xl mx-auto px-6 py-16">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-12 mb-12">
                    // Brand
                    <div class="md:col-span-1">
                        <A href="/" attr:class="inline-flex items-center gap-2 mb-4 group">
                            <div class="w-10 h-10 rounded-xl bg-gradient-to-br from-orange-500 to-violet-600 flex items-center justify-center transform group-hover:scale-110 transition-transform">
                                <Icon name=icons::SPARKLES class="w-5 h-5 text-white" />
                            </div>
                            <span class="text-xl font-black text-white">
                                "Visionary"
                                <span class="bg-gradient-to-r from-orange-400 to-violet-400 bg-clip-text text-transparent">"Studio"</span>
                            </span>
                        </A>
                        <p class="text-sm text-gray-400 leading-relaxed">
                            "Professional AI-powered photo editing platform designed for creators, designers, and businesses."
                        </p>
                    </div>

                    {FOOTER_LINKS.iter().map(|group| view! {
                        <div>
                            <h4 class="text-white font-bold mb-4 text-sm uppercase tracking-wider">{group.title}</h4>
                            <ul class="space-y-3">
                                {group.links.iter().map(|(name, href)| view! {
                                    <li>
                                        <a
                                            href=*href
                                            class="text-sm text-gray-400 hover:text-orange-400 transition-colors"
                                        >
                                            {*name}
                                        </a>
                                    </li>
                                }).collect_view()}
                            </ul>
                        </div>
                    }).collect_view()}
                </div>

                // Bottom bar
                <div class="pt-8 border-t border-white/5 flex flex-col sm:flex-row items-center justify-between gap-4">
                    <span class="text-sm text-gray-500">"© 2025 Visionary Studio. All rights reserved."</span>
                    <span class="text-sm text-gray-500">"Made for creators"</span>
                </div>
            </div>
        </footer>
    }
}
