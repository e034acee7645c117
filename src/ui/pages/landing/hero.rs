use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::{HERO_PILLS, HERO_SLIDES};
use crate::core::motion::{RevealOffset, RevealSchedule, delay_style, reveal_classes};
use crate::ui::common::{
    FeaturePill, FloatingShapes, MagneticWrapper, MeshGradient, NoiseOverlay, SplitTextReveal,
    TiltCard,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{use_delayed_flag, use_motion_config, use_slide_cycle};

const DEMO_TOOLS: [&str; 4] = ["Layers", "Adjust", "Effects", "Export"];

#[component]
pub fn HeroSection() -> impl IntoView {
    let config = use_motion_config();
    let mounted = use_delayed_flag(0);
    let pills = RevealSchedule::with_base(config.hero_pill_base_ms, config.pill_stagger_ms);

    let shown = move |offset: RevealOffset| reveal_classes(mounted.get(), offset);

    view! {
        <section class="min-h-screen flex flex-col items-center justify-center relative overflow-hidden px-6">
            <MeshGradient />
            <NoiseOverlay />
            <FloatingShapes />

            <div class="relative z-10 max-w-6xl mx-auto text-center">
                // Eyebrow badge
                <div class=move || format!(
                    "inline-flex items-center gap-3 px-5 py-2.5 rounded-full border border-white/10 bg-white/5 backdrop-blur-xl mb-10 transition-all duration-1000 {}",
                    shown(RevealOffset::Above),
                )>
                    <div class="flex -space-x-2">
                        {(0..3).map(|i| view! {
                            <div
                                class="w-6 h-6 rounded-full border-2 border-slate-900 bg-gradient-to-br from-orange-400 to-pink-500"
                                style=format!("z-index: {}", 3 - i)
                            ></div>
                        }).collect_view()}
                    </div>
                    <span class="text-sm text-gray-300">"Trusted by 50,000+ creators worldwide"</span>
                    <div class="w-px h-4 bg-white/20"></div>
                    <span class="text-xs text-orange-400">"★★★★★"</span>
                    <span class="text-xs text-gray-400">"4.9"</span>
                </div>

                <h1 class="text-5xl sm:text-7xl md:text-8xl lg:text-9xl font-black tracking-tight leading-[0.9] mb-8">
                    <div class="overflow-hidden">
                        <SplitTextReveal
                            text="Edit Photos"
                            class="text-white"
                            delay_ms=config.headline_delay_ms
                        />
                    </div>
                    <div class="overflow-hidden mt-2">
                        <SplitTextReveal
                            text="Like Magic"
                            class="bg-gradient-to-r from-orange-400 via-pink-500 to-violet-500 bg-clip-text text-transparent"
                            delay_ms=config.headline_accent_delay_ms
                        />
                    </div>
                </h1>

                <p
                    class=move || format!(
                        "text-lg md:text-xl text-gray-400 max-w-xl mx-auto mb-10 leading-relaxed transition-all duration-1000 {}",
                        shown(RevealOffset::Small),
                    )
                    style=move || delay_style(config.hero_subtitle_delay_ms, mounted.get())
                >
                    "Professional-grade AI editing tools that transform your photos in seconds. No experience required."
                </p>

                <div
                    class=move || format!(
                        "flex flex-col sm:flex-row gap-4 justify-center items-center mb-16 transition-all duration-1000 {}",
                        shown(RevealOffset::Small),
                    )
                    style=move || delay_style(config.hero_actions_delay_ms, mounted.get())
                >
                    <MagneticWrapper>
                        <A
                            href="/dashboard"
                            attr:class="group inline-flex items-center gap-2 px-8 py-4 rounded-xl bg-gradient-to-r from-orange-500 to-pink-500 hover:from-orange-400 hover:to-pink-400 text-white font-semibold shadow-lg shadow-orange-500/25"
                        >
                            "Start Creating - It's Free"
                            <Icon name=icons::ARROW_RIGHT class="w-5 h-5 transition-transform group-hover:translate-x-1" />
                        </A>
                    </MagneticWrapper>
                    <MagneticWrapper>
                        <a
                            href="#features"
                            class="group inline-flex items-center gap-2 px-8 py-4 rounded-xl border border-white/10 hover:border-white/20 hover:bg-white/5 text-white"
                        >
                            "See It In Action"
                        </a>
                    </MagneticWrapper>
                </div>

                <div class="flex flex-wrap justify-center gap-3 mb-20">
                    {HERO_PILLS
                        .iter()
                        .enumerate()
                        .map(|(i, pill)| view! { <FeaturePill pill=*pill delay_ms=pills.delay_ms(i) /> })
                        .collect_view()}
                </div>

                <div
                    class=move || format!("transition-all duration-1000 {}", shown(RevealOffset::Large))
                    style=move || delay_style(config.hero_showcase_delay_ms, mounted.get())
                >
                    <TiltCard class="w-full max-w-4xl mx-auto">
                        <DemoWindow />
                    </TiltCard>
                </div>
            </div>
        </section>
    }
}

/// Mock editor window rotating through before/after slides
#[component]
fn DemoWindow() -> impl IntoView {
    let config = use_motion_config();
    let cycle = use_slide_cycle(HERO_SLIDES.len(), config.slide_interval_ms);

    view! {
        <div class="relative rounded-3xl border border-white/10 bg-slate-900/80 backdrop-blur-2xl p-2 overflow-hidden">
            <div class="relative rounded-2xl bg-slate-950/90 overflow-hidden">
                <div class="flex items-center justify-between px-5 py-4 border-b border-white/5">
                    <div class="flex items-center gap-4">
                        <div class="flex gap-1.5">
                            <div class="w-3 h-3 rounded-full bg-red-500"></div>
                            <div class="w-3 h-3 rounded-full bg-yellow-500"></div>
                            <div class="w-3 h-3 rounded-full bg-green-500"></div>
                        </div>
                        <div class="h-6 w-px bg-white/10"></div>
                        <div class="flex gap-1">
                            {(0..HERO_SLIDES.len()).map(|i| view! {
                                <button
                                    class=move || if cycle.active.get() == i {
                                        "h-2 rounded-full transition-all duration-300 bg-orange-500 w-6"
                                    } else {
                                        "h-2 w-2 rounded-full transition-all duration-300 bg-white/20 hover:bg-white/40"
                                    }
                                    on:click=move |_| cycle.select.run(i)
                                    aria-label=format!("Show slide {}", i + 1)
                                ></button>
                            }).collect_view()}
                        </div>
                    </div>
                    <div class="flex items-center gap-3">
                        <span class="text-xs text-gray-500 font-mono">"visionary_project.vs"</span>
                        <div class="px-2 py-1 rounded bg-emerald-500/20 text-emerald-400 text-xs font-medium">
                            "Auto-saved"
                        </div>
                    </div>
                </div>

                <div class="relative aspect-[16/9] overflow-hidden">
                    {HERO_SLIDES.iter().enumerate().map(|(i, slide)| view! {
                        <div class=move || if cycle.active.get() == i {
                            "absolute inset-0 transition-all duration-700 opacity-100 scale-100"
                        } else {
                            "absolute inset-0 transition-all duration-700 opacity-0 scale-105"
                        }>
                            <div class="absolute inset-0 flex">
                                <div class="w-1/2 bg-gradient-to-br from-slate-700 to-slate-800 flex items-center justify-center">
                                    <div class="text-center">
                                        <Icon name=icons::IMAGE class="w-10 h-10 mx-auto mb-4 opacity-50" />
                                        <span class="text-gray-500 font-medium">{slide.before}</span>
                                    </div>
                                </div>
                                <div class=format!("w-1/2 bg-gradient-to-br {} flex items-center justify-center", slide.gradient)>
                                    <div class="text-center">
                                        <Icon name=icons::SPARKLES class="w-10 h-10 mx-auto mb-4" />
                                        <span class="text-white font-semibold">{slide.after}</span>
                                    </div>
                                </div>
                                <div class="absolute left-1/2 top-0 bottom-0 w-1 bg-white/30 -translate-x-1/2"></div>
                            </div>
                        </div>
                    }).collect_view()}
                </div>

                <div class="flex items-center justify-between px-5 py-4 border-t border-white/5">
                    <div class="flex items-center gap-2">
                        {DEMO_TOOLS.iter().map(|tool| view! {
                            <button class="px-3 py-1.5 rounded-lg text-xs font-medium text-gray-400 hover:text-white hover:bg-white/5 transition-all">
                                {*tool}
                            </button>
                        }).collect_view()}
                    </div>
                    <div class="flex items-center gap-3">
                        <span class="text-xs text-gray-500">"100%"</span>
                        <div class="w-24 h-1 bg-white/10 rounded-full overflow-hidden">
                            <div class="h-full w-full bg-gradient-to-r from-orange-500 to-pink-500 rounded-full"></div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
