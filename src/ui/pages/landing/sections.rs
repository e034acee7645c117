use leptos::html::Div;
use leptos::prelude::*;

use crate::core::content::{FEATURES, Feature, MARQUEE_ITEMS, PRO_TOOLS, ProTool, STATS, Stat};
use crate::core::format::format_stat;
use crate::core::motion::{RevealOffset, RevealSchedule, reveal_classes};
use crate::ui::common::NoiseOverlay;
use crate::ui::icon::Icon;
use crate::ui::motion::{use_animated_counter, use_motion_config, use_visibility_observer};

#[component]
pub fn MarqueeStrip() -> impl IntoView {
    // Two copies back to back so the -50% keyframe loops seamlessly
    let items = MARQUEE_ITEMS.iter().chain(MARQUEE_ITEMS.iter());

    view! {
        <div class="w-full overflow-hidden py-6 border-y border-white/5 bg-white/[0.02]">
            <div class="flex animate-marquee">
                {items.map(|item| view! {
                    <div class="flex items-center gap-8 mx-8 whitespace-nowrap">
                        <span class="text-sm font-medium text-gray-500 uppercase tracking-widest">{*item}</span>
                        <span class="w-2 h-2 rounded-full bg-gradient-to-r from-orange-500 to-pink-500"></span>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn StatsSection() -> impl IntoView {
    view! {
        <section class="py-20 relative overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-b from-slate-900 via-slate-800/30 to-slate-900"></div>
            <div class="relative z-10 max-w-6xl mx-auto px-6">
                <div class="grid grid-cols-2 lg:grid-cols-4 gap-6 lg:gap-8">
                    {STATS.iter().map(|stat| view! { <StatCard stat=*stat /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatCard(stat: Stat) -> impl IntoView {
    view! {
        <div class="group relative backdrop-blur-lg bg-gradient-to-br from-slate-800/50 to-slate-900/50 border border-white/10 rounded-2xl p-8 text-center transition-all duration-300 hover:border-white/20 hover:scale-105">
            <div class="relative z-10">
                <div class="text-4xl mb-2">{stat.icon}</div>
                <div class="text-4xl lg:text-5xl font-black mb-3">
                    <AnimatedNumber target=stat.value suffix=stat.suffix />
                </div>
                <div class="text-gray-400 uppercase tracking-widest text-xs font-semibold">
                    {stat.label}
                </div>
            </div>
            <div class="absolute bottom-0 left-0 h-1 bg-gradient-to-r from-orange-500 to-pink-500 rounded-full transition-all duration-300 w-0 group-hover:w-full"></div>
        </div>
    }
}

/// Number that counts up from 0 the first time it scrolls into view
#[component]
pub fn AnimatedNumber(
    target: u64,
    #[prop(default = "")] suffix: &'static str,
    #[prop(default = "bg-gradient-to-r from-orange-400 via-pink-400 to-violet-500 bg-clip-text text-transparent")]
    class: &'static str,
) -> impl IntoView {
    let config = use_motion_config();
    let (node_ref, visible) = use_visibility_observer::<leptos::html::Span>(config.reveal_threshold);
    let counter = use_animated_counter(target, config.counter_duration_ms);

    Effect::new(move |_| {
        if visible.get() {
            counter.set_active.run(true);
        }
    });

    view! {
        <span node_ref=node_ref class=class>
            {move || format_stat(counter.value.get(), suffix)}
        </span>
    }
}

#[component]
pub fn FeaturesSection() -> impl IntoView {
    let config = use_motion_config();
    let schedule = RevealSchedule::new(config.feature_stagger_ms);

    view! {
        <section id="features" class="py-24 relative overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-b from-slate-900 via-slate-800/50 to-slate-900"></div>
            <div class="relative z-10 max-w-7xl mx-auto px-6">
                <div class="text-center mb-20">
                    <div class="inline-flex items-center gap-2 mb-4 px-4 py-2 rounded-full border border-orange-400/30 bg-orange-400/5 backdrop-blur-sm">
                        <span class="text-orange-400">"✨"</span>
                        <span class="text-sm font-semibold text-orange-300">"Powerful Features"</span>
                    </div>
                    <h2 class="text-5xl md:text-6xl font-black text-white mb-6 leading-tight">
                        "Everything You Need"
                        <br />
                        <span class="bg-gradient-to-r from-orange-400 to-pink-400 bg-clip-text text-transparent">
                            "to Edit Like a Pro"
                        </span>
                    </h2>
                    <p class="text-lg text-gray-300 max-w-3xl mx-auto leading-relaxed">
                        "Professional-grade tools powered by cutting-edge AI. From basic adjustments to advanced generative editing, create stunning images in seconds."
                    </p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6 lg:gap-8">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(i, feature)| view! {
                            <FeatureCard feature=*feature schedule=schedule index=i />
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Feature card with its own visibility watch and a per-index delay
#[component]
fn FeatureCard(feature: Feature, schedule: RevealSchedule, index: usize) -> impl IntoView {
    let config = use_motion_config();
    let (node_ref, visible) = use_visibility_observer::<Div>(config.reveal_threshold);
    let (hovered, set_hovered) = signal(false);

    view! {
        <div
            node_ref=node_ref
            class=move || format!(
                "group relative backdrop-blur-lg bg-gradient-to-br from-slate-800/50 to-slate-900/50 border border-white/10 rounded-2xl p-8 transition-all duration-700 cursor-pointer overflow-hidden {} {}",
                reveal_classes(visible.get(), RevealOffset::Large),
                if hovered.get() { "border-white/30 scale-105" } else { "" },
            )
            style=move || schedule.transition_delay(index, visible.get())
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <Show when=move || hovered.get()>
                <div class=format!("absolute inset-0 {} opacity-5 blur-2xl", feature.gradient)></div>
            </Show>

            <div class="relative z-10">
                <div class="text-4xl mb-4 transition-transform duration-300 group-hover:scale-110">
                    {feature.icon}
                </div>
                <h3 class="text-xl font-bold text-white mb-3 group-hover:text-orange-400 transition-colors">
                    {feature.title}
                </h3>
                <p class="text-gray-300 leading-relaxed text-sm">{feature.description}</p>
            </div>

            <div class=move || format!(
                "absolute bottom-0 left-0 h-1 {} transition-all duration-300 {}",
                feature.gradient,
                if hovered.get() { "w-full" } else { "w-0" },
            )></div>
        </div>
    }
}

/// Pro tools grid: one section-level watch, items cascade by index
#[component]
pub fn ProToolsSection() -> impl IntoView {
    let config = use_motion_config();
    let (node_ref, visible) = use_visibility_observer::<Div>(config.reveal_threshold);
    let schedule = RevealSchedule::new(config.tool_stagger_ms);

    view! {
        <section id="tools" class="py-32 relative overflow-hidden">
            <NoiseOverlay />
            <div node_ref=node_ref class="relative z-10 max-w-7xl mx-auto px-6">
                <div class=move || format!(
                    "text-center mb-20 transition-all duration-1000 {}",
                    reveal_classes(visible.get(), RevealOffset::Medium),
                )>
                    <h2 class="text-5xl md:text-6xl font-black text-white mb-6">
                        "Pro Tools, "
                        <span class="bg-gradient-to-r from-orange-400 via-pink-500 to-violet-500 bg-clip-text text-transparent">
                            "Zero Learning Curve"
                        </span>
                    </h2>
                    <p class="text-lg text-gray-400 max-w-2xl mx-auto">
                        "Studio-grade results from tools that explain themselves."
                    </p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {PRO_TOOLS
                        .iter()
                        .enumerate()
                        .map(|(i, tool)| view! {
                            <ToolCard tool=*tool visible=visible schedule=schedule index=i />
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ToolCard(
    tool: ProTool,
    visible: Signal<bool>,
    schedule: RevealSchedule,
    index: usize,
) -> impl IntoView {
    view! {
        <div
            class=move || format!(
                "group relative rounded-3xl border border-white/10 bg-slate-900/60 p-8 overflow-hidden transition-all duration-700 hover:border-white/20 {}",
                reveal_classes(visible.get(), RevealOffset::ExtraLarge),
            )
            style=move || schedule.transition_delay(index, visible.get())
        >
            <div
                class="absolute -inset-px rounded-3xl opacity-0 group-hover:opacity-100 blur-xl transition-opacity"
                style=format!("background: radial-gradient(circle at 30% 20%, {}, transparent 70%)", tool.glow())
            ></div>
            <div class="relative z-10">
                <div class="flex items-center justify-between mb-6">
                    <div class=format!("w-14 h-14 rounded-2xl bg-gradient-to-br {} flex items-center justify-center", tool.gradient)>
                        <Icon name=tool.icon class="w-7 h-7" />
                    </div>
                    <span class="px-2.5 py-1 rounded-full bg-white/10 text-xs font-bold tracking-wider text-white">
                        {tool.tag}
                    </span>
                </div>
                <h3 class="text-2xl font-bold text-white mb-3">{tool.title}</h3>
                <p class="text-gray-400 text-sm leading-relaxed mb-6">{tool.description}</p>
                <div class="flex items-baseline gap-2">
                    <span class=format!("text-3xl font-black bg-gradient-to-r {} bg-clip-text text-transparent", tool.gradient)>
                        {tool.stat}
                    </span>
                    <span class="text-xs uppercase tracking-widest text-gray-500">{tool.stat_label}</span>
                </div>
            </div>
        </div>
    }
}
