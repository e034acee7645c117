//! Decorative building blocks shared by the landing page and dashboard

use leptos::ev::MouseEvent;
use leptos::html::Div;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::content::{FLOATING_SHAPES, FloatingShape, Pill, ShapeKind};
use crate::core::motion::{RevealOffset, RevealSchedule, reveal_classes};
use crate::core::pointer::{TILT_RESET, magnetic_style};
use crate::ui::motion::{use_delayed_flag, use_motion_config};

#[cfg(not(feature = "ssr"))]
pub fn pointer_rect(element: &leptos::web_sys::Element) -> crate::core::pointer::PointerRect {
    let rect = element.get_bounding_client_rect();
    crate::core::pointer::PointerRect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Blurred colour blobs behind the hero
#[component]
pub fn MeshGradient() -> impl IntoView {
    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
            <div class="absolute -top-40 -left-40 w-[600px] h-[600px] rounded-full bg-orange-500/20 blur-3xl animate-blob"></div>
            <div class="absolute top-1/3 -right-40 w-[500px] h-[500px] rounded-full bg-pink-500/20 blur-3xl animate-blob animation-delay-2000"></div>
            <div class="absolute -bottom-40 left-1/3 w-[550px] h-[550px] rounded-full bg-violet-500/20 blur-3xl animate-blob animation-delay-4000"></div>
        </div>
    }
}

#[component]
pub fn NoiseOverlay() -> impl IntoView {
    view! {
        <div class="absolute inset-0 pointer-events-none opacity-[0.015] bg-noise" aria-hidden="true"></div>
    }
}

#[component]
pub fn FloatingShapes() -> impl IntoView {
    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
            {FLOATING_SHAPES.iter().map(|shape| view! { <Shape shape=*shape /> }).collect_view()}
        </div>
    }
}

#[component]
fn Shape(shape: FloatingShape) -> impl IntoView {
    let size = format!("width: {0}px; height: {0}px;", shape.size);
    let style = format!("{} {}", size, shape.style());

    match shape.kind {
        ShapeKind::Ring => view! {
            <div class="absolute rounded-full border border-white/10" style=style></div>
        }
        .into_any(),
        ShapeKind::Square => view! {
            <div class="absolute rotate-45 border border-orange-500/20" style=style></div>
        }
        .into_any(),
        ShapeKind::Triangle => view! {
            <svg class="absolute text-pink-500/20" style=style viewBox="0 0 100 100">
                <polygon points="50,10 90,90 10,90" fill="none" stroke="currentColor" stroke-width="2" />
            </svg>
        }
        .into_any(),
    }
}

/// Headline whose words slide up one after another once `delay_ms` passes
#[component]
pub fn SplitTextReveal(
    text: &'static str,
    #[prop(default = 0)] delay_ms: u32,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    let config = use_motion_config();
    let revealed = use_delayed_flag(delay_ms);
    let schedule = RevealSchedule::new(config.word_stagger_ms);

    view! {
        <span class=format!("inline-flex flex-wrap gap-x-[0.25em] {}", class)>
            {text
                .split_whitespace()
                .enumerate()
                .map(|(i, word)| {
                    let delay = schedule.delay_ms(i);
                    view! {
                        <span class="overflow-hidden inline-block">
                            <span
                                class="inline-block transition-all duration-700 ease-out"
                                style=move || {
                                    let offset = if revealed.get() { "0" } else { "120%" };
                                    format!("transform: translateY({offset}); transition-delay: {delay}ms")
                                }
                            >
                                {word}
                            </span>
                        </span>
                    }
                })
                .collect_view()}
        </span>
    }
}

/// Wrapper that drifts towards the pointer while hovered
#[component]
pub fn MagneticWrapper(children: Children) -> impl IntoView {
    let node_ref = NodeRef::<Div>::new();
    let style = RwSignal::new(magnetic_style((0.0, 0.0)));

    let on_move = move |ev: MouseEvent| {
        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::pointer::magnetic_offset;

            if let Some(element) = node_ref.get() {
                let offset = magnetic_offset(
                    pointer_rect(&element),
                    ev.client_x() as f64,
                    ev.client_y() as f64,
                );
                style.set(magnetic_style(offset));
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = ev;
        }
    };

    view! {
        <div
            node_ref=node_ref
            class="transition-transform duration-200 ease-out"
            style=move || style.get()
            on:mousemove=on_move
            on:mouseleave=move |_| style.set(magnetic_style((0.0, 0.0)))
        >
            {children()}
        </div>
    }
}

/// Card that tilts in perspective towards the pointer
#[component]
pub fn TiltCard(children: Children, #[prop(default = "")] class: &'static str) -> impl IntoView {
    let node_ref = NodeRef::<Div>::new();
    let style = RwSignal::new(String::new());

    let on_move = move |ev: MouseEvent| {
        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::pointer::tilt_style;

            if let Some(element) = node_ref.get() {
                style.set(tilt_style(
                    pointer_rect(&element),
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

    view! {
        <div
            node_ref=node_ref
            class=format!("transition-all duration-300 ease-out {}", class)
            style=move || style.get()
            on:mousemove=on_move
            on:mouseleave=move |_| style.set(TILT_RESET.to_string())
        >
            {children()}
        </div>
    }
}

/// Chip linking to the dashboard that fades in after `delay_ms`
#[component]
pub fn FeaturePill(pill: Pill, delay_ms: u32) -> impl IntoView {
    let visible = use_delayed_flag(delay_ms);

    view! {
        <A href="/dashboard">
            <div class=move || format!(
                "inline-flex items-center gap-2 px-4 py-2 rounded-full bg-white/5 border border-white/10 backdrop-blur-sm transition-all duration-500 hover:bg-white/10 hover:border-white/20 cursor-pointer {}",
                reveal_classes(visible.get(), RevealOffset::Small),
            )>
                <span class="text-lg">{pill.icon}</span>
                <span class="text-sm text-gray-300">{pill.text}</span>
            </div>
        </A>
    }
}
