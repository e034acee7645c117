use leptos::ev::MouseEvent;
use leptos::html::{Div, Section};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::format::group_thousands;
use crate::core::motion::{RevealOffset, delay_style, reveal_classes};
use crate::ui::common::{MagneticWrapper, NoiseOverlay};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{use_animated_counter, use_motion_config, use_visibility_observer};

/// Creators shown in the live status pill
const LIVE_CREATORS: u64 = 50_000;

#[component]
pub fn FinalCtaSection() -> impl IntoView {
    let config = use_motion_config();
    let (section_ref, visible) = use_visibility_observer::<Section>(config.section_threshold);
    let counter = use_animated_counter(LIVE_CREATORS, config.counter_duration_ms);
    let container_ref = NodeRef::<Div>::new();
    let spotlight = RwSignal::new((50.0_f64, 50.0_f64));

    Effect::new(move |_| {
        if visible.get() {
            counter.set_active.run(true);
        }
    });

    let on_move = move |ev: MouseEvent| {
        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::pointer::relative_percent;

            if let Some(element) = container_ref.get() {
                spotlight.set(relative_percent(
                    crate::ui::common::decor::pointer_rect(&element),
                    ev.client_x() as f64,
                    ev.client_y() as f64,
                ));
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = ev;
        }
    };

    let shown = move |offset: RevealOffset| reveal_classes(visible.get(), offset);

    view! {
        <section node_ref=section_ref class="py-32 md:py-40 relative overflow-hidden">
            <NoiseOverlay />
            <div class="absolute top-0 left-0 right-0 h-16 bg-gradient-to-b from-black to-transparent pointer-events-none"></div>
            <div class="absolute bottom-0 left-0 right-0 h-16 bg-gradient-to-t from-black to-transparent pointer-events-none"></div>

            <div class="absolute inset-8 pointer-events-none hidden md:block" aria-hidden="true">
                <div class="absolute top-0 left-0 w-16 h-16 border-l-2 border-t-2 border-white/10"></div>
                <div class="absolute top-0 right-0 w-16 h-16 border-r-2 border-t-2 border-white/10"></div>
                <div class="absolute bottom-0 left-0 w-16 h-16 border-l-2 border-b-2 border-white/10"></div>
                <div class="absolute bottom-0 right-0 w-16 h-16 border-r-2 border-b-2 border-white/10"></div>
            </div>

            <div node_ref=container_ref class="relative z-10 max-w-6xl mx-auto px-6" on:mousemove=on_move>
                <div
                    class="absolute inset-0 pointer-events-none transition-all duration-500 ease-out opacity-60"
                    style=move || {
                        let (x, y) = spotlight.get();
                        format!("background: radial-gradient(ellipse 600px 400px at {x:.1}% {y:.1}%, rgba(249, 115, 22, 0.12), transparent);")
                    }
                ></div>

                <div class=move || format!("relative transition-all duration-1000 {}", shown(RevealOffset::ExtraLarge))>
                    <div class="relative p-10 md:p-20 rounded-[2.5rem] border border-white/10 bg-gradient-to-b from-white/[0.07] via-white/[0.03] to-transparent backdrop-blur-2xl overflow-hidden">
                        <div class="relative z-10 text-center">
                            <div
                                class=move || format!(
                                    "inline-flex items-center gap-4 px-6 py-3 rounded-full bg-gradient-to-r from-orange-500/20 via-pink-500/10 to-violet-500/20 border border-white/10 backdrop-blur-xl mb-10 transition-all duration-700 {}",
                                    if visible.get() { "opacity-100 scale-100" } else { "opacity-0 scale-90" },
                                )
                                style=move || delay_style(config.section_badge_delay_ms, visible.get())
                            >
                                <div class="flex items-center gap-2">
                                    <div class="relative">
                                        <div class="w-3 h-3 rounded-full bg-emerald-500"></div>
                                        <div class="absolute inset-0 w-3 h-3 rounded-full bg-emerald-500 animate-ping opacity-50"></div>
                                    </div>
                                    <span class="text-sm font-semibold text-emerald-400">
                                        {move || format!("{}+", group_thousands(counter.value.get()))}
                                    </span>
                                </div>
                                <div class="w-px h-5 bg-white/20"></div>
                                <span class="text-sm text-gray-300">"creators editing right now"</span>
                            </div>

                            <h2 class="text-4xl sm:text-5xl md:text-7xl lg:text-8xl font-black mb-10 leading-[0.9] tracking-tight">
                                <span
                                    class=move || format!("block transition-all duration-700 {}", shown(RevealOffset::Large))
                                    style=move || delay_style(config.section_heading_delay_ms, visible.get())
                                >
                                    <span class="text-white">"The Future of"</span>
                                </span>
                                <span
                                    class=move || format!("block mt-3 transition-all duration-700 {}", shown(RevealOffset::Large))
                                    style=move || delay_style(config.section_accent_delay_ms, visible.get())
                                >
                                    <span class="bg-gradient-to-r from-orange-400 via-rose-500 to-violet-500 bg-clip-text text-transparent">
                                        "Photo Editing"
                                    </span>
                                </span>
                            </h2>

                            <p
                                class=move || format!(
                                    "text-lg md:text-xl text-gray-400 max-w-2xl mx-auto mb-12 transition-all duration-700 {}",
                                    shown(RevealOffset::Medium),
                                )
                                style=move || delay_style(config.section_body_delay_ms, visible.get())
                            >
                                "Join the creators turning ordinary shots into scroll-stopping images."
                            </p>

                            <div class="flex justify-center">
                                <MagneticWrapper>
                                    <A
                                        href="/dashboard"
                                        attr:class="group inline-flex items-center gap-3 px-10 py-5 rounded-2xl bg-gradient-to-r from-orange-500 via-rose-500 to-violet-600 text-white text-lg font-bold shadow-2xl shadow-orange-500/30"
                                    >
                                        <Icon name=icons::ZAP class="w-5 h-5" />
                                        "Start Editing Free"
                                        <Icon name=icons::ARROW_RIGHT class="w-5 h-5 transition-transform group-hover:translate-x-1" />
                                    </A>
                                </MagneticWrapper>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
