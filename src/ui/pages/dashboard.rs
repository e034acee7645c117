//! Dashboard page component
//!
//! Lists the user's projects in a grid. When there are none, an animated
//! empty state invites them to start one; the "New Project" dialog creates a
//! project from a canvas preset and opens it in the editor.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::web_sys;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::content::EMPTY_STATE_PILLS;
use crate::core::format::format_dimensions;
use crate::core::motion::{RevealOffset, RevealSchedule, delay_style, reveal_classes};
use crate::core::projects::CANVAS_PRESETS;
use crate::core::{NewProject, Project};
use crate::ui::api::{create_project, fetch_projects};
use crate::ui::common::{
    BaseModal, FeaturePill, FloatingShapes, LoadingSpinner, MagneticWrapper, MeshGradient,
    NoiseOverlay, SplitTextReveal,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{use_delayed_flag, use_motion_config};

/// Dashboard page component
#[component]
pub fn DashboardPage() -> impl IntoView {
    let config = use_motion_config();
    let mounted = use_delayed_flag(0);

    // State
    let projects = RwSignal::new(Vec::<Project>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let show_new_project = RwSignal::new(false);

    // Load projects once on the client
    Effect::new(move |_| {
        spawn_local(async move {
            match fetch_projects().await {
                Ok(list) => {
                    let _ = projects.try_set(list);
                }
                Err(e) => {
                    leptos::logging::warn!("failed to load projects: {e}");
                    let _ = error.try_set(Some(e));
                }
            }
            let _ = loading.try_set(false);
        });
    });

    let open_modal = Callback::new(move |_: ()| show_new_project.set(true));
    let close_modal = Callback::new(move |_: ()| show_new_project.set(false));

    view! {
        <div class="min-h-screen pt-32 pb-16 relative overflow-hidden bg-black">
            <MeshGradient />
            <NoiseOverlay />
            <FloatingShapes />

            <div class="container mx-auto px-6 relative z-10">
                // Header
                <div class="flex flex-col md:flex-row items-start md:items-center justify-between mb-12 gap-6">
                    <div>
                        <div class=move || format!(
                            "inline-flex items-center gap-3 px-5 py-2.5 rounded-full border border-white/10 bg-white/5 backdrop-blur-xl mb-6 transition-all duration-1000 {}",
                            reveal_classes(mounted.get(), RevealOffset::Above),
                        )>
                            <div class="flex items-center gap-2">
                                <div class="w-2 h-2 rounded-full bg-emerald-400 animate-pulse"></div>
                                <span class="text-xs font-mono text-gray-400 uppercase tracking-widest">"Dashboard"</span>
                            </div>
                            <div class="w-px h-4 bg-white/20"></div>
                            <span class="text-sm text-gray-300">"Welcome back"</span>
                        </div>
                        <h1 class="text-4xl md:text-5xl lg:text-6xl font-black text-white mb-4">
                            <SplitTextReveal text="Your Projects" delay_ms=config.headline_delay_ms class="text-white" />
                        </h1>
                        <p
                            class=move || format!(
                                "text-lg text-white/70 max-w-lg transition-all duration-1000 {}",
                                reveal_classes(mounted.get(), RevealOffset::Small),
                            )
                            style=move || delay_style(config.dashboard_subtitle_delay_ms, mounted.get())
                        >
                            "Create and manage your AI-powered image designs"
                        </p>
                    </div>

                    <MagneticWrapper>
                        <button
                            class=move || format!(
                                "group relative overflow-hidden rounded-xl bg-gradient-to-r from-orange-500 to-pink-500 hover:from-orange-400 hover:to-pink-400 shadow-lg shadow-orange-500/25 px-8 py-4 text-lg font-semibold text-white transition-all duration-700 {}",
                                reveal_classes(mounted.get(), RevealOffset::Small),
                            )
                            on:click=move |_| open_modal.run(())
                        >
                            <span class="relative z-10 flex items-center gap-2">
                                <Icon name=icons::PLUS class="h-5 w-5 transition-transform group-hover:rotate-90 duration-300" />
                                "New Project"
                            </span>
                        </button>
                    </MagneticWrapper>
                </div>

                // Projects content
                {move || {
                    if loading.get() {
                        view! { <LoadingSpinner message="Loading projects...".to_string() /> }.into_any()
                    } else if let Some(e) = error.get() {
                        view! {
                            <div class="flex items-center justify-center gap-3 py-20 text-red-400" role="alert">
                                <Icon name=icons::ALERT_CIRCLE class="w-5 h-5" />
                                <span>{e}</span>
                            </div>
                        }
                        .into_any()
                    } else if projects.with(|p| p.is_empty()) {
                        view! { <EmptyState on_create=open_modal /> }.into_any()
                    } else {
                        view! { <ProjectGrid projects=projects /> }.into_any()
                    }
                }}
            </div>

            <NewProjectModal
                is_open=show_new_project.into()
                on_close=close_modal
                projects=projects
            />
        </div>
    }
}

#[component]
fn ProjectGrid(projects: RwSignal<Vec<Project>>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
            <For
                each=move || projects.get()
                key=|project| project.id
                children=|project| view! { <ProjectCard project=project /> }
            />
        </div>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let href = project.editor_href();
    let dimensions = format_dimensions(project.width, project.height);
    let updated = project.updated_at.format("%b %d, %Y").to_string();
    // Preview box follows the canvas shape, clamped so extreme ratios stay readable
    let ratio = project.aspect_ratio().clamp(0.5, 2.0);

    view! {
        <A
            href=href
            attr:class="group block rounded-2xl border border-white/10 bg-white/5 backdrop-blur-xl overflow-hidden hover:border-orange-500/40 hover:bg-white/10 transition-all duration-300"
        >
            <div class="relative bg-gradient-to-br from-orange-500/10 via-pink-500/10 to-violet-600/10 flex items-center justify-center"
                 style=format!("aspect-ratio: {ratio:.3};")>
                <Icon name=icons::IMAGE class="w-10 h-10 text-white/30 group-hover:text-orange-400 transition-colors" />
            </div>
            <div class="p-4">
                <h3 class="text-white font-semibold truncate">{project.title}</h3>
                <div class="mt-1 flex items-center justify-between text-xs text-gray-400">
                    <span class="font-mono">{dimensions}</span>
                    <span>{updated}</span>
                </div>
            </div>
        </A>
    }
}

#[component]
fn EmptyState(on_create: Callback<()>) -> impl IntoView {
    let config = use_motion_config();
    let visible = use_delayed_flag(config.empty_state_delay_ms);
    let schedule = RevealSchedule::with_base(config.empty_state_pill_base_ms, config.pill_stagger_ms);

    view! {
        <div class=move || format!(
            "relative flex flex-col items-center justify-center py-20 text-center transition-all duration-1000 {}",
            reveal_classes(visible.get(), RevealOffset::Medium),
        )>
            <div class="absolute inset-0 -z-10" aria-hidden="true">
                <div class="absolute inset-0 rounded-3xl border border-white/5 bg-white/[0.02] backdrop-blur-sm"></div>
                <div class="absolute top-4 left-4 w-8 h-8 border-l-2 border-t-2 border-orange-500/30"></div>
                <div class="absolute top-4 right-4 w-8 h-8 border-r-2 border-t-2 border-orange-500/30"></div>
                <div class="absolute bottom-4 left-4 w-8 h-8 border-l-2 border-b-2 border-pink-500/30"></div>
                <div class="absolute bottom-4 right-4 w-8 h-8 border-r-2 border-b-2 border-pink-500/30"></div>
            </div>

            <div class="relative mb-8">
                <div class="absolute inset-0 -m-4 rounded-full border border-orange-500/20 animate-ping"></div>
                <div class="w-28 h-28 rounded-full bg-gradient-to-br from-orange-500/20 via-pink-500/20 to-violet-600/20 flex items-center justify-center border border-white/10 backdrop-blur-sm">
                    <Icon name=icons::IMAGE class="h-14 w-14 text-orange-400" />
                </div>
            </div>

            <h3 class="text-3xl md:text-4xl font-black text-white mb-4">
                <span class="bg-gradient-to-r from-white via-white to-gray-300 bg-clip-text text-transparent">
                    "Create Your First"
                </span>
                <br />
                <span class="bg-gradient-to-r from-orange-400 via-pink-500 to-violet-500 bg-clip-text text-transparent">
                    "Masterpiece"
                </span>
            </h3>
            <p class="text-white/60 mb-10 max-w-md text-lg leading-relaxed">
                "Upload an image to start editing with our powerful AI tools, or create a blank canvas to design from scratch."
            </p>

            <MagneticWrapper>
                <button
                    class="group relative overflow-hidden rounded-xl bg-gradient-to-r from-orange-500 to-pink-500 hover:from-orange-400 hover:to-pink-400 shadow-lg shadow-orange-500/25 px-10 py-5 text-xl font-semibold text-white"
                    on:click=move |_| on_create.run(())
                >
                    <span class="relative z-10 flex items-center gap-3">
                        <Icon name=icons::SPARKLES class="h-6 w-6 transition-transform group-hover:scale-110 group-hover:rotate-12 duration-300" />
                        "Start Creating"
                    </span>
                </button>
            </MagneticWrapper>

            <div class="flex flex-wrap justify-center gap-3 mt-10">
                {EMPTY_STATE_PILLS
                    .iter()
                    .enumerate()
                    .map(|(i, pill)| view! { <FeaturePill pill=*pill delay_ms=schedule.delay_ms(i) /> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Dialog for creating a project from a canvas preset
#[component]
fn NewProjectModal(
    is_open: Signal<bool>,
    on_close: Callback<()>,
    projects: RwSignal<Vec<Project>>,
) -> impl IntoView {
    let title = RwSignal::new(String::from("Untitled Project"));
    let preset = RwSignal::new(0usize);
    let local_error = RwSignal::new(None::<String>);
    let creating = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if creating.get_untracked() {
            return;
        }

        let (_, width, height) = CANVAS_PRESETS[preset.get_untracked().min(CANVAS_PRESETS.len() - 1)];
        let request = NewProject::new(title.get_untracked().trim(), width, height);
        if let Err(e) = request.validate() {
            local_error.set(Some(e.to_string()));
            return;
        }

        creating.set(true);
        local_error.set(None);

        spawn_local(async move {
            match create_project(&request).await {
                Ok(project) => {
                    let href = project.editor_href();
                    projects.update(|list| list.insert(0, project));
                    on_close.run(());
                    let nav = use_navigate();
                    nav(&href, Default::default());
                }
                Err(e) => {
                    local_error.set(Some(e));
                }
            }
            creating.set(false);
        });
    };

    view! {
        <BaseModal
            title="New Project".to_string()
            subtitle="Pick a canvas size to start from".to_string()
            is_open=is_open
            on_close=on_close
        >
            <form on:submit=on_submit class="space-y-6">
                <div>
                    <label for="project-title" class="block text-sm font-medium text-gray-300 mb-2">"Project Name"</label>
                    <input
                        type="text"
                        id="project-title"
                        class="w-full px-4 py-3 bg-white/5 border border-white/10 rounded-xl text-white placeholder-gray-500 focus:border-orange-500/50 focus:ring-2 focus:ring-orange-500/20 outline-none"
                        class:border-red-500=move || local_error.get().is_some()
                        prop:value=move || title.get()
                        on:input=move |ev| {
                            title.set(event_target_value(&ev));
                            local_error.set(None);
                        }
                    />
                    {move || local_error.get().map(|e| view! { <p class="mt-1 text-sm text-red-400">{e}</p> })}
                </div>

                <div class="grid grid-cols-2 gap-3">
                    {CANVAS_PRESETS
                        .iter()
                        .enumerate()
                        .map(|(i, (name, width, height))| view! {
                            <button
                                type="button"
                                class=move || if preset.get() == i {
                                    "p-4 rounded-xl border border-orange-500/60 bg-orange-500/10 text-left transition-colors"
                                } else {
                                    "p-4 rounded-xl border border-white/10 bg-white/5 hover:bg-white/10 text-left transition-colors"
                                }
                                on:click=move |_| preset.set(i)
                            >
                                <div class="text-sm font-semibold text-white">{*name}</div>
                                <div class="text-xs font-mono text-gray-400">{format_dimensions(*width, *height)}</div>
                            </button>
                        })
                        .collect_view()}
                </div>

                <div class="flex justify-end gap-3">
                    <button
                        type="button"
                        class="px-4 py-2 text-sm font-medium text-gray-400 hover:text-white transition-colors"
                        on:click=move |_| on_close.run(())
                        disabled=move || creating.get()
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="px-5 py-2 text-sm font-semibold text-white rounded-lg bg-gradient-to-r from-orange-500 to-pink-500 disabled:opacity-50"
                        disabled=move || creating.get()
                    >
                        {move || if creating.get() { "Creating..." } else { "Create" }}
                    </button>
                </div>
            </form>
        </BaseModal>
    }
}
