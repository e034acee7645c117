//! Floating site header
//!
//! Hidden inside the editor and while any overlay is open. Section anchors
//! are only shown on the landing page.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::ui::icon::{Icon, icons};
use crate::ui::overlay::use_overlay_context;

const NAV_LINK: &str = "text-white font-medium transition-all duration-300 hover:text-orange-400";

/// Whether the header belongs on `path`
pub fn header_visible(path: &str, overlay_open: bool) -> bool {
    !overlay_open && !path.starts_with("/editor")
}

#[component]
pub fn Header() -> impl IntoView {
    let location = use_location();
    let overlay = use_overlay_context();

    let path = location.pathname;
    let visible = move || header_visible(&path.get(), overlay.is_open());
    let on_landing = move || path.get() == "/";

    view! {
        <Show when=visible>
            <header class="fixed top-6 left-1/2 -translate-x-1/2 z-30 text-nowrap">
                <div class="backdrop-blur-md bg-white/10 border border-white/20 rounded-full px-8 py-3 flex items-center justify-between gap-8">
                    <A href="/" attr:class="mr-10 md:mr-20 flex items-center gap-2">
                        <span class="text-xl font-bold bg-gradient-to-r from-white via-orange-200 to-orange-400 bg-clip-text text-transparent">
                            "Visionary Studio"
                        </span>
                    </A>

                    <Show when=on_landing>
                        <nav class="hidden md:flex space-x-6">
                            <a href="#features" class=NAV_LINK>"Features"</a>
                            <a href="#pricing" class=NAV_LINK>"Pricing"</a>
                            <a href="#contact" class=NAV_LINK>"Contact"</a>
                        </nav>
                    </Show>

                    <div class="flex items-center gap-3 ml-10 md:ml-20">
                        <A
                            href="/dashboard"
                            attr:class="flex items-center gap-2 px-4 py-2 rounded-full bg-gradient-to-r from-orange-500 to-amber-500 text-white font-semibold hover:scale-105 transition-transform"
                        >
                            <Icon name=icons::SPARKLES class="w-4 h-4" />
                            <span>"Open Studio"</span>
                        </A>
                    </div>
                </div>
            </header>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_in_editor() {
        assert!(!header_visible("/editor/42", false));
        assert!(!header_visible("/editor", false));
    }

    #[test]
    fn test_hidden_while_overlay_open() {
        assert!(!header_visible("/", true));
        assert!(!header_visible("/dashboard", true));
    }

    #[test]
    fn test_shown_elsewhere() {
        assert!(header_visible("/", false));
        assert!(header_visible("/dashboard", false));
    }
}
