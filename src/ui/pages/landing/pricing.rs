use leptos::html::Div;
use leptos::prelude::*;

use crate::core::content::{PLANS, Plan};
use crate::core::format::format_price;
use crate::core::motion::{RevealOffset, reveal_classes};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{use_motion_config, use_visibility_observer};
use crate::ui::site::use_site_context;

#[component]
pub fn PricingSection() -> impl IntoView {
    view! {
        <section id="pricing" class="py-24 relative overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-b from-slate-900 via-slate-800/50 to-slate-900"></div>
            <div class="relative max-w-5xl mx-auto px-6">
                <div class="text-center mb-20">
                    <div class="inline-flex items-center gap-2 mb-4 px-4 py-2 rounded-full border border-orange-400/30 bg-orange-400/5 backdrop-blur-sm">
                        <span class="text-orange-400">"💰"</span>
                        <span class="text-sm font-semibold text-orange-300">"Transparent Pricing"</span>
                    </div>
                    <h2 class="text-5xl md:text-6xl font-black text-white mb-6 leading-tight">
                        "Simple, "
                        <span class="bg-gradient-to-r from-orange-400 to-pink-500 bg-clip-text text-transparent">
                            "Flexible Pricing"
                        </span>
                    </h2>
                    <p class="text-lg text-gray-300 max-w-2xl mx-auto">
                        "Start free and upgrade when you're ready. No credit card required. Cancel anytime with no hidden fees."
                    </p>
                </div>

                <div class="grid md:grid-cols-2 gap-8 max-w-4xl mx-auto">
                    {PLANS.iter().map(|plan| view! { <PricingCard plan=*plan /> }).collect_view()}
                </div>

                <div class="mt-16 text-center">
                    <div class="inline-flex items-center gap-3 px-6 py-3 rounded-full border border-green-400/30 bg-green-400/5 backdrop-blur-sm">
                        <span class="text-xl">"🛡️"</span>
                        <p class="text-sm text-gray-300">
                            <span class="text-green-400 font-semibold">"30-day guarantee"</span>
                            " - Try Pro risk-free"
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn PricingCard(plan: Plan) -> impl IntoView {
    let config = use_motion_config();
    let site = use_site_context();
    let (node_ref, visible) = use_visibility_observer::<Div>(config.reveal_threshold);
    let (hovered, set_hovered) = signal(false);
    let notice = RwSignal::new(None::<&'static str>);

    // No signed-in account to compare against, so no plan is "current"
    let is_current = false;

    let on_select = move |_| {
        if plan.can_checkout(site.billing_enabled(), is_current) {
            leptos::logging::log!("checkout requested for plan {}", plan.id);
            notice.set(Some("Checkout opens in your account portal."));
        } else {
            notice.set(Some("Billing is disabled. Enable billing to continue."));
        }
    };

    let card_class = move || {
        let base = "relative backdrop-blur-xl border rounded-3xl p-8 transition-all duration-300";
        if plan.featured {
            format!("{base} bg-gradient-to-br from-slate-800/80 to-slate-900/80 border-orange-400/50 scale-105")
        } else if hovered.get() {
            format!("{base} bg-gradient-to-br from-slate-800/50 to-slate-900/50 border-white/20 scale-105")
        } else {
            format!("{base} bg-gradient-to-br from-slate-800/50 to-slate-900/50 border-white/10")
        }
    };

    view! {
        <div
            node_ref=node_ref
            class=move || format!(
                "relative group transition-all duration-700 {}",
                reveal_classes(visible.get(), RevealOffset::Large),
            )
            on:mouseenter=move |_| set_hovered.set(true)
            on:mouseleave=move |_| set_hovered.set(false)
        >
            <Show when=move || plan.featured && hovered.get()>
                <div class="absolute inset-0 bg-gradient-to-br from-orange-500/20 to-pink-500/20 rounded-3xl blur-2xl"></div>
            </Show>

            <div class=card_class>
                {plan.featured.then(|| view! {
                    <div class="absolute -top-5 left-1/2 -translate-x-1/2">
                        <div class="inline-flex items-center gap-2 px-4 py-1.5 rounded-full bg-gradient-to-r from-orange-500 to-pink-500 text-white text-sm font-bold shadow-lg shadow-orange-500/50">
                            "⭐ Most Popular"
                        </div>
                    </div>
                })}

                <div class="text-center mb-8">
                    <h3 class="text-2xl font-bold text-white mb-4">{plan.name}</h3>
                    <div class="flex items-baseline justify-center gap-1 mb-2">
                        <span class="text-5xl font-black bg-gradient-to-r from-orange-400 to-pink-500 bg-clip-text text-transparent">
                            {format_price(plan.price)}
                        </span>
                        {(!plan.is_free()).then(|| view! {
                            <span class="text-lg text-gray-400 font-semibold">"/month"</span>
                        })}
                    </div>
                    <p class=if plan.is_free() {
                        "text-sm text-gray-400 font-medium"
                    } else {
                        "text-sm text-orange-400 font-medium"
                    }>
                        {plan.tagline()}
                    </p>
                </div>

                <ul class="space-y-4 mb-8">
                    {plan.features.iter().map(|feature| view! {
                        <li class="flex items-start gap-3 text-gray-200">
                            <Icon name=icons::CHECK class="w-5 h-5 mt-0.5 flex-shrink-0" />
                            <span class="text-sm leading-relaxed">{*feature}</span>
                        </li>
                    }).collect_view()}
                </ul>

                <button
                    class=if plan.featured {
                        "w-full py-4 rounded-xl font-semibold text-white bg-gradient-to-r from-orange-500 to-pink-500 hover:from-orange-400 hover:to-pink-400 transition-all disabled:opacity-50 disabled:cursor-not-allowed"
                    } else {
                        "w-full py-4 rounded-xl font-semibold text-white border border-white/10 bg-white/5 hover:bg-white/10 transition-all disabled:opacity-50 disabled:cursor-not-allowed"
                    }
                    disabled=is_current || plan.checkout_plan_id.is_none()
                    on:click=on_select
                >
                    {plan.button_text}
                    " →"
                </button>

                {move || notice.get().map(|message| view! {
                    <p class="mt-4 text-sm text-center text-amber-300" role="status">{message}</p>
                })}

                <div class="mt-8 pt-8 border-t border-white/5">
                    <p class="text-xs text-gray-500 text-center">"Cancel anytime. No hidden fees."</p>
                </div>
            </div>
        </div>
    }
}
