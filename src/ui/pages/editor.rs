//! Editor page component
//!
//! Loads the project named in the URL and lays out the editing workspace:
//! top bar, tool sidebar and the canvas frame. Image processing itself runs
//! on the hosted AI services, so the canvas here only previews dimensions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::core::format::format_dimensions;
use crate::core::{EditorTool, Project};
use crate::ui::api::fetch_project;
use crate::ui::common::{LoadingOverlay, MeshGradient, NoiseOverlay};
use crate::ui::icon::{Icon, icons};

/// Editor page component
#[component]
pub fn EditorPage() -> impl IntoView {
    let params = use_params_map();
    let project_id = Memo::new(move |_| params.get().get("project_id").unwrap_or_default());

    let project = RwSignal::new(None::<Project>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    // `?tool=<slug>` preselects a tool
    let query = use_query_map();
    let initial_tool = query
        .with_untracked(|q| q.get("tool").and_then(|slug| EditorTool::from_slug(&slug)))
        .unwrap_or_default();
    let active_tool = RwSignal::new(initial_tool);

    // Load project whenever the id in the URL changes
    Effect::new(move |_| {
        let id = project_id.get();
        loading.set(true);
        error.set(None);

        spawn_local(async move {
            match fetch_project(&id).await {
                Ok(loaded) => {
                    let _ = project.try_set(Some(loaded));
                }
                Err(e) => {
                    leptos::logging::warn!("failed to load project {id}: {e}");
                    let _ = project.try_set(None);
                    let _ = error.try_set(Some(e));
                }
            }
            let _ = loading.try_set(false);
        });
    });

    view! {
        <MobileMessage />

        <div class="hidden lg:block min-h-screen bg-slate-950 relative">
            <div class="fixed inset-0 pointer-events-none">
                <MeshGradient />
                <NoiseOverlay />
            </div>

            <Show
                when=move || error.get().is_none()
                fallback=move || view! { <ProjectNotFound message=error.get().unwrap_or_default() /> }
            >
                <div class="relative z-10 flex flex-col h-screen">
                    <TopBar project=project />
                    <div class="relative flex flex-1 overflow-hidden">
                        <ToolSidebar active_tool=active_tool />
                        <CanvasArea project=project active_tool=active_tool />
                        <LoadingOverlay visible=loading.into() message="Loading editor...".to_string() />
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn TopBar(project: RwSignal<Option<Project>>) -> impl IntoView {
    let title = move || project.with(|p| p.as_ref().map(|p| p.title.clone()).unwrap_or_default());

    view! {
        <header class="flex items-center justify-between px-6 py-3 border-b border-white/10 bg-slate-900/60 backdrop-blur-xl">
            <div class="flex items-center gap-4">
                <A
                    href="/dashboard"
                    attr:class="flex items-center gap-2 text-sm text-gray-400 hover:text-white transition-colors"
                >
                    <Icon name=icons::ARROW_LEFT class="w-4 h-4" />
                    "All Projects"
                </A>
                <div class="w-px h-5 bg-white/10"></div>
                <h1 class="text-white font-semibold truncate max-w-xs">{title}</h1>
            </div>
            <span class="text-xs font-mono text-gray-500">
                {move || project.with(|p| p.as_ref().map(|p| format_dimensions(p.width, p.height)))}
            </span>
        </header>
    }
}

#[component]
fn ToolSidebar(active_tool: RwSignal<EditorTool>) -> impl IntoView {
    view! {
        <aside class="w-72 flex-shrink-0 border-r border-white/10 bg-slate-900/60 backdrop-blur-xl overflow-y-auto">
            <nav class="p-3 space-y-1">
                {EditorTool::all()
                    .iter()
                    .map(|tool| {
                        let tool = *tool;
                        view! {
                            <button
                                class=move || if active_tool.get() == tool {
                                    "w-full flex items-center gap-3 px-3 py-2.5 rounded-lg bg-gradient-to-r from-orange-500/20 to-pink-500/10 border border-orange-500/30 text-white text-left"
                                } else {
                                    "w-full flex items-center gap-3 px-3 py-2.5 rounded-lg border border-transparent text-gray-400 hover:text-white hover:bg-white/5 text-left"
                                }
                                on:click=move |_| active_tool.set(tool)
                            >
                                <Icon name=tool.icon() class="w-4 h-4" />
                                <span class="text-sm font-medium">{tool.label()}</span>
                                {tool.is_ai().then(|| view! {
                                    <span class="ml-auto text-[10px] font-bold uppercase tracking-wider text-orange-400">"AI"</span>
                                })}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="px-5 py-4 border-t border-white/10">
                <h2 class="text-sm font-semibold text-white">{move || active_tool.get().label()}</h2>
                <p class="mt-1 text-xs text-gray-400">{move || active_tool.get().description()}</p>
            </div>
        </aside>
    }
}

#[component]
fn CanvasArea(project: RwSignal<Option<Project>>, active_tool: RwSignal<EditorTool>) -> impl IntoView {
    view! {
        <main class="flex-1 flex items-center justify-center p-10 bg-slate-900/30">
            {move || project.get().map(|p| {
                let ratio = p.aspect_ratio();
                view! {
                    <div
                        class="relative max-w-full max-h-full w-[640px] rounded-lg border border-white/10 bg-white/[0.03] shadow-2xl flex items-center justify-center"
                        style=format!("aspect-ratio: {ratio:.4};")
                        data-tool=move || active_tool.get().slug()
                    >
                        <div class="text-center">
                            <Icon name=icons::IMAGE class="w-12 h-12 mx-auto text-white/20" />
                            <p class="mt-3 text-sm font-mono text-gray-500">{format_dimensions(p.width, p.height)}</p>
                        </div>
                    </div>
                }
            })}
        </main>
    }
}

#[component]
fn ProjectNotFound(message: String) -> impl IntoView {
    view! {
        <div class="relative z-10 min-h-screen flex items-center justify-center">
            <div class="text-center p-8 max-w-md">
                <div class="relative inline-block mb-6">
                    <div class="w-16 h-16 rounded-full bg-slate-800/50 border border-white/10 flex items-center justify-center">
                        <Icon name=icons::SPARKLES class="w-8 h-8" />
                    </div>
                </div>
                <h1 class="text-2xl font-bold text-white mb-3">"Project Not Found"</h1>
                <p class="text-white/50 mb-2">"The project you're looking for doesn't exist or you don't have access to it."</p>
                <p class="text-xs text-white/30 mb-6">{message}</p>
                <A href="/dashboard" attr:class="text-sm text-orange-400 hover:text-orange-300">"Back to dashboard"</A>
            </div>
        </div>
    }
}

/// Shown instead of the workspace on small screens
#[component]
fn MobileMessage() -> impl IntoView {
    view! {
        <div class="lg:hidden min-h-screen bg-slate-950 flex items-center justify-center p-6 relative overflow-hidden">
            <MeshGradient />
            <NoiseOverlay />
            <div class="relative z-10 text-center max-w-md p-8">
                <div class="relative inline-block mb-6">
                    <div class="w-20 h-20 rounded-2xl bg-gradient-to-br from-slate-800/80 to-slate-900/80 border border-white/10 flex items-center justify-center backdrop-blur-sm">
                        <Icon name=icons::MONITOR class="h-10 w-10" />
                    </div>
                </div>
                <h1 class="text-2xl font-bold text-white mb-4">"Desktop Required"</h1>
                <p class="text-white/60 text-lg mb-2">"This editor is only usable on desktop."</p>
                <p class="text-white/40 text-sm">"Please use a larger screen to access the full editing experience."</p>
                <div class="flex flex-wrap justify-center gap-2 mt-6">
                    {["Full Canvas", "AI Tools", "Pro Features"]
                        .into_iter()
                        .map(|feature| view! {
                            <span class="px-3 py-1 text-xs rounded-full bg-white/5 border border-white/10 text-white/50">
                                {feature}
                            </span>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
