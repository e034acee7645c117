use crate::ui::icon::{Icon, icons};
use crate::ui::overlay::register_overlay;
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::JsCast;

/// Base modal with backdrop, header and Escape-to-close.
///
/// While open the modal counts as an overlay, which hides the site header.
#[component]
pub fn BaseModal(
    /// Modal title
    title: String,
    /// Optional subtitle/description
    #[prop(optional)]
    subtitle: Option<String>,
    /// Whether modal is open
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
    /// Modal content
    children: Children,
    /// Maximum width class (default: max-w-lg)
    #[prop(default = "max-w-lg")]
    max_width: &'static str,
) -> impl IntoView {
    register_overlay(is_open);

    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                on_close.run(());
            }
        });

        on_cleanup(move || drop(handle_keydown));
    }

    view! {
        <div
            class=move || {
                if is_open.get() {
                    "modal-backdrop fixed inset-0 z-50 flex items-center justify-center bg-black/70 backdrop-blur-sm transition-all duration-300"
                } else {
                    "modal-backdrop fixed inset-0 z-50 flex items-center justify-center bg-black/70 backdrop-blur-sm opacity-0 pointer-events-none transition-all duration-300"
                }
            }
            role="dialog"
            aria-modal="true"
            on:click=move |e| {
                #[cfg(not(feature = "ssr"))]
                {
                    if let Some(target) = e.target() {
                        if let Some(element) = target.dyn_ref::<web_sys::Element>() {
                            if element.class_list().contains("modal-backdrop") {
                                on_close.run(());
                            }
                        }
                    }
                }
                #[cfg(feature = "ssr")]
                {
                    let _ = e;
                }
            }
        >
            <div class=format!("w-full {} mx-4 rounded-2xl border border-slate-700 bg-slate-900 shadow-2xl", max_width)>
                <div class="flex items-start justify-between px-6 pt-6">
                    <div>
                        <h3 class="text-xl font-semibold text-white">{title}</h3>
                        {subtitle.map(|s| view! { <p class="mt-1 text-sm text-slate-400">{s}</p> })}
                    </div>
                    <button
                        class="p-2 rounded-lg text-slate-400 hover:text-white hover:bg-slate-800 transition-colors"
                        on:click=move |_| on_close.run(())
                        title="Close"
                        aria-label="Close modal"
                    >
                        <Icon name=icons::X class="w-5 h-5"/>
                    </button>
                </div>

                <div class="p-6">
                    {children()}
                </div>
            </div>
        </div>
    }
}
