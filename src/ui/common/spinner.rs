use leptos::prelude::*;

/// Spinner size options
#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "w-4 h-4 border-2",
            SpinnerSize::Medium => "w-8 h-8 border-2",
            SpinnerSize::Large => "w-12 h-12 border-4",
        }
    }
}

/// Ring spinner in the brand colour
#[component]
pub fn Spinner(
    #[prop(default = SpinnerSize::Medium)] size: SpinnerSize,
    /// Optional label text
    #[prop(default = String::new())]
    label: String,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center gap-3">
            <div
                class=format!(
                    "{} rounded-full border-orange-500 border-t-transparent animate-spin",
                    size.class(),
                )
                role="status"
                aria-live="polite"
            >
                <span class="sr-only">"Loading..."</span>
            </div>
            {(!label.is_empty()).then(|| view! {
                <p class="text-sm text-slate-400">{label.clone()}</p>
            })}
        </div>
    }
}

/// Centered page-level loading state
#[component]
pub fn LoadingSpinner(
    /// Optional loading message
    #[prop(default = String::new())]
    message: String,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-24">
            <Spinner size=SpinnerSize::Large label=message />
        </div>
    }
}

/// Blocking overlay shown while a long-running job is in flight
#[component]
pub fn LoadingOverlay(
    /// Whether overlay is visible
    visible: Signal<bool>,
    /// Loading message
    #[prop(default = "Processing...".to_string())]
    message: String,
) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="absolute inset-0 z-40 flex items-center justify-center bg-slate-900/80 backdrop-blur-sm">
                <div class="rounded-2xl border border-slate-700 bg-slate-800 px-8 py-6">
                    <Spinner size=SpinnerSize::Large label=message.clone() />
                </div>
            </div>
        </Show>
    }
}
