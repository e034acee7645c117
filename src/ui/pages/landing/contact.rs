use leptos::ev::SubmitEvent;
use leptos::html::Section;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::ContactMessage;
use crate::core::motion::{RevealOffset, delay_style, reveal_classes};
use crate::ui::api::submit_contact;
use crate::ui::common::{Spinner, SpinnerSize};
use crate::ui::icon::{Icon, icons};
use crate::ui::motion::{use_motion_config, use_visibility_observer};

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-white/5 border border-white/10 rounded-xl text-white placeholder-gray-500 focus:border-orange-500/50 focus:ring-2 focus:ring-orange-500/20 transition-all outline-none";

#[component]
pub fn ContactSection() -> impl IntoView {
    let config = use_motion_config();
    let (section_ref, visible) = use_visibility_observer::<Section>(config.section_threshold);

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let sending = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let sent = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if sending.get_untracked() {
            return;
        }

        let request =
            ContactMessage::new(name.get_untracked(), email.get_untracked(), message.get_untracked())
                .trimmed();
        if let Err(e) = request.validate() {
            error.set(Some(e.to_string()));
            return;
        }

        sending.set(true);
        error.set(None);

        spawn_local(async move {
            match submit_contact(&request).await {
                Ok(()) => {
                    sent.set(true);
                    name.set(String::new());
                    email.set(String::new());
                    message.set(String::new());
                }
                Err(e) => {
                    leptos::logging::warn!("contact submission failed: {e}");
                    error.set(Some(e));
                }
            }
            sending.set(false);
        });
    };

    let shown = move || reveal_classes(visible.get(), RevealOffset::Medium);

    view! {
        <section id="contact" node_ref=section_ref class="py-32 relative overflow-hidden">
            <div class="absolute inset-0" aria-hidden="true">
                <div class="absolute top-1/2 left-1/4 w-96 h-96 bg-gradient-to-r from-orange-600/20 to-violet-600/20 rounded-full blur-3xl"></div>
                <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-gradient-to-r from-cyan-600/20 to-pink-600/20 rounded-full blur-3xl"></div>
            </div>

            <div class="relative z-10 max-w-7xl mx-auto px-6">
                <div class=move || format!("text-center mb-16 transition-all duration-1000 {}", shown())>
                    <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-white/5 border border-white/10 backdrop-blur-sm mb-6">
                        <Icon name=icons::MAIL class="w-4 h-4" />
                        <span class="text-sm text-gray-300">"Get In Touch"</span>
                    </div>
                    <h2 class="text-5xl md:text-6xl font-black text-white mb-6">
                        "Let's Create "
                        <span class="bg-gradient-to-r from-orange-400 via-rose-500 to-violet-500 bg-clip-text text-transparent">
                            "Together"
                        </span>
                    </h2>
                    <p class="text-lg text-gray-400 max-w-2xl mx-auto">
                        "Have questions or feedback? We'd love to hear from you. Drop us a message and we'll get back to you as soon as possible."
                    </p>
                </div>

                <div
                    class=move || format!("grid md:grid-cols-2 gap-12 transition-all duration-1000 {}", shown())
                    style=move || delay_style(config.section_heading_delay_ms, visible.get())
                >
                    <div class="space-y-8">
                        <div class="backdrop-blur-xl bg-white/5 border border-white/10 rounded-2xl p-8">
                            <h3 class="text-2xl font-bold text-white mb-6">"Contact Information"</h3>
                            <div class="flex items-start gap-4">
                                <div class="w-12 h-12 rounded-xl bg-gradient-to-br from-orange-500/20 to-violet-600/20 border border-white/10 flex items-center justify-center flex-shrink-0">
                                    <Icon name=icons::MAIL class="w-5 h-5" />
                                </div>
                                <div>
                                    <h4 class="text-white font-semibold mb-1">"Email"</h4>
                                    <p class="text-gray-400 text-sm">"hello@visionary.studio"</p>
                                </div>
                            </div>
                        </div>
                        <div class="backdrop-blur-xl bg-gradient-to-br from-orange-500/10 to-violet-600/10 border border-orange-500/20 rounded-2xl p-6">
                            <h4 class="text-white font-bold mb-2">"Quick Response"</h4>
                            <p class="text-sm text-gray-300">"We typically respond within 24 hours."</p>
                        </div>
                    </div>

                    <div class="backdrop-blur-xl bg-white/5 border border-white/10 rounded-2xl p-8">
                        <form on:submit=on_submit class="space-y-6">
                            <div>
                                <label for="contact-name" class="block text-sm font-medium text-gray-300 mb-2">"Your Name"</label>
                                <input
                                    type="text"
                                    id="contact-name"
                                    class=INPUT_CLASS
                                    placeholder="Name"
                                    required
                                    bind:value=name
                                />
                            </div>
                            <div>
                                <label for="contact-email" class="block text-sm font-medium text-gray-300 mb-2">"Email Address"</label>
                                <input
                                    type="email"
                                    id="contact-email"
                                    class=INPUT_CLASS
                                    placeholder="example@gmail.com"
                                    required
                                    bind:value=email
                                />
                            </div>
                            <div>
                                <label for="contact-message" class="block text-sm font-medium text-gray-300 mb-2">"Message"</label>
                                <textarea
                                    id="contact-message"
                                    rows=5
                                    class=format!("{INPUT_CLASS} resize-none")
                                    placeholder="Tell us how we can help you..."
                                    required
                                    bind:value=message
                                ></textarea>
                            </div>

                            {move || error.get().map(|e| view! {
                                <p class="text-sm text-red-400" role="alert">{e}</p>
                            })}
                            <Show when=move || sent.get()>
                                <p class="text-sm text-emerald-400" role="status">"Thanks! We'll be in touch soon."</p>
                            </Show>

                            <button
                                type="submit"
                                class="w-full flex items-center justify-center gap-2 bg-gradient-to-r from-orange-500 via-rose-500 to-violet-600 hover:from-orange-600 hover:via-rose-600 hover:to-violet-700 text-white font-semibold py-4 rounded-xl transition-all duration-300 hover:scale-105 shadow-lg shadow-orange-500/25 disabled:opacity-60"
                                disabled=move || sending.get()
                            >
                                <Show when=move || sending.get()>
                                    <Spinner size=SpinnerSize::Small />
                                </Show>
                                "Send Message"
                            </button>
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}
