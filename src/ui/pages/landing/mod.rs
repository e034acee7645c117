//! Landing page for Visionary Studio
//!
//! Sections reveal as they scroll into view and the stat counters tick up
//! once visible:
//! - Hero with split-text headline, magnetic CTAs and the demo window
//! - Marquee strip and stat counters
//! - Feature cascade and pro tools grid
//! - Pricing, final call to action, contact form and footer

mod contact;
mod cta;
mod footer;
mod hero;
mod pricing;
mod sections;

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::ui::site::use_site_context;

const PAGE_TITLE: &str = "Visionary Studio - AI Photo Editing for Creators";
const PAGE_DESCRIPTION: &str = "Remove backgrounds, extend scenes and upscale photos with AI. Professional photo editing in your browser, free to start.";

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <div class="min-h-screen bg-black text-white overflow-x-hidden pt-20">
            <hero::HeroSection />
            <sections::MarqueeStrip />
            <sections::StatsSection />
            <sections::FeaturesSection />
            <sections::ProToolsSection />
            <pricing::PricingSection />
            <cta::FinalCtaSection />
            <contact::ContactSection />
            <footer::Footer />
        </div>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    let site = use_site_context();
    let canonical = site.url("/");
    let og_image = site.url("/og-image.png");

    view! {
        <Title text=PAGE_TITLE />
        <Meta name="description" content=PAGE_DESCRIPTION />
        <Meta name="keywords" content="AI photo editor, background removal, image upscaling, photo extender, online photo editing" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=canonical.clone() />
        <Meta property="og:title" content=PAGE_TITLE />
        <Meta property="og:description" content=PAGE_DESCRIPTION />
        <Meta property="og:image" content=og_image />

        // Twitter
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content=PAGE_TITLE />
        <Meta name="twitter:description" content=PAGE_DESCRIPTION />

        <Link rel="canonical" href=canonical />
    }
}
