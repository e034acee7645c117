//! Static marketing content rendered by the landing and dashboard pages

/// Animated stat card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    pub value: u64,
    pub suffix: &'static str,
    pub icon: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat {
        label: "Images Edited",
        value: 100_000,
        suffix: "+",
        icon: "🖼️",
    },
    Stat {
        label: "Active Users",
        value: 10_000,
        suffix: "+",
        icon: "👥",
    },
    Stat {
        label: "AI Edits",
        value: 450_000,
        suffix: "+",
        icon: "✨",
    },
    Stat {
        label: "Satisfaction",
        value: 98,
        suffix: "%",
        icon: "⭐",
    },
];

/// Feature card in the "Everything you need" grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub gradient: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "✂️",
        title: "Smart Crop & Resize",
        description: "Interactive cropping with aspect ratio constraints and intelligent resizing that preserves image quality across any dimension.",
        gradient: "bg-gradient-to-r from-blue-500 to-cyan-500",
    },
    Feature {
        icon: "🎨",
        title: "Color & Light Adjustment",
        description: "Professional-grade brightness, contrast, saturation controls with real-time preview and auto-enhance capabilities.",
        gradient: "bg-gradient-to-r from-purple-500 to-pink-500",
    },
    Feature {
        icon: "🤖",
        title: "AI Background Removal",
        description: "Remove or replace backgrounds instantly using advanced AI that detects complex edges and fine details with precision.",
        gradient: "bg-gradient-to-r from-green-500 to-emerald-500",
    },
    Feature {
        icon: "🔧",
        title: "AI Content Editor",
        description: "Edit images with natural language prompts. Remove objects, change elements, or add new content using generative AI.",
        gradient: "bg-gradient-to-r from-orange-500 to-red-500",
    },
    Feature {
        icon: "📏",
        title: "Image Extender",
        description: "Expand your canvas in any direction with AI-powered generative fill that seamlessly blends new content with existing images.",
        gradient: "bg-gradient-to-r from-indigo-500 to-purple-500",
    },
    Feature {
        icon: "⬆️",
        title: "AI Upscaler",
        description: "Enhance image resolution up to 4x using AI upscaling technology that preserves details and reduces artifacts.",
        gradient: "bg-gradient-to-r from-cyan-500 to-blue-500",
    },
];

/// Card in the bento-style "pro tools" grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProTool {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tag: &'static str,
    pub gradient: &'static str,
    pub stat: &'static str,
    pub stat_label: &'static str,
}

impl ProTool {
    /// Glow colour matching the dominant hue of the gradient
    pub fn glow(&self) -> &'static str {
        if self.gradient.contains("orange") {
            "rgba(249,115,22,0.4)"
        } else if self.gradient.contains("pink") {
            "rgba(236,72,153,0.4)"
        } else {
            "rgba(139,92,246,0.4)"
        }
    }
}

pub const PRO_TOOLS: &[ProTool] = &[
    ProTool {
        icon: "upscale",
        title: "Instant Upscale",
        description: "Transform any image to stunning 8K resolution using neural networks",
        tag: "AI",
        gradient: "from-orange-500 to-pink-500",
        stat: "8x",
        stat_label: "Resolution",
    },
    ProTool {
        icon: "eraser",
        title: "Magic Eraser",
        description: "Remove unwanted objects and let AI seamlessly reconstruct the scene",
        tag: "HOT",
        gradient: "from-pink-500 to-rose-500",
        stat: "1s",
        stat_label: "Process",
    },
    ProTool {
        icon: "shadow",
        title: "Shadow Master",
        description: "Intelligently adjust shadows and highlights with one-click presets",
        tag: "NEW",
        gradient: "from-violet-500 to-purple-500",
        stat: "50+",
        stat_label: "Presets",
    },
    ProTool {
        icon: "palette",
        title: "Color DNA",
        description: "Extract and apply color grading from any reference image instantly",
        tag: "AI",
        gradient: "from-orange-500 to-amber-500",
        stat: "∞",
        stat_label: "Styles",
    },
    ProTool {
        icon: "face",
        title: "Face Perfect",
        description: "AI-powered portrait retouching that keeps skin texture natural",
        tag: "PRO",
        gradient: "from-pink-500 to-violet-500",
        stat: "97%",
        stat_label: "Accuracy",
    },
    ProTool {
        icon: "cloud",
        title: "Sky Replace",
        description: "Swap skies with 100+ cinematic options - golden hour to northern lights",
        tag: "NEW",
        gradient: "from-blue-500 via-indigo-500 to-violet-500",
        stat: "100+",
        stat_label: "Skies",
    },
];

/// Subscription plan shown in the pricing section
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    /// Plan key as known to the billing provider
    pub id: &'static str,
    pub name: &'static str,
    /// Monthly price in whole dollars
    pub price: u32,
    pub features: &'static [&'static str],
    pub featured: bool,
    /// Checkout plan identifier; free plans have none
    pub checkout_plan_id: Option<&'static str>,
    pub button_text: &'static str,
}

impl Plan {
    pub fn is_free(&self) -> bool {
        self.price == 0
    }

    pub fn tagline(&self) -> &'static str {
        if self.is_free() {
            "Perfect for getting started"
        } else {
            "Billed monthly"
        }
    }

    /// Whether the call to action can start a checkout
    pub fn can_checkout(&self, billing_enabled: bool, is_current: bool) -> bool {
        billing_enabled && !is_current && self.checkout_plan_id.is_some()
    }
}

pub const PLANS: &[Plan] = &[
    Plan {
        id: "free_user",
        name: "Starter",
        price: 0,
        features: &[
            "3 projects maximum",
            "20 exports per month",
            "Basic crop & resize tools",
            "Color & light adjustments",
            "Text editing tool",
        ],
        featured: false,
        checkout_plan_id: None,
        button_text: "Get Started Free",
    },
    Plan {
        id: "pro",
        name: "Pro",
        price: 12,
        features: &[
            "Unlimited projects",
            "Unlimited exports",
            "All editing tools included",
            "AI background removal",
            "AI image extender",
            "AI upscaler & retouch",
            "Priority support",
        ],
        featured: true,
        checkout_plan_id: Some("pro_monthly"),
        button_text: "Upgrade to Pro",
    },
];

pub const MARQUEE_ITEMS: &[&str] = &[
    "AI Background Removal",
    "Smart Retouching",
    "One-Click Enhance",
    "Batch Processing",
    "4K Export",
    "Real-time Preview",
];

/// Before/after pair in the hero demo card
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroSlide {
    pub before: &'static str,
    pub after: &'static str,
    pub gradient: &'static str,
}

pub const HERO_SLIDES: &[HeroSlide] = &[
    HeroSlide {
        before: "Original",
        after: "Enhanced",
        gradient: "from-orange-500 to-pink-500",
    },
    HeroSlide {
        before: "Raw",
        after: "Processed",
        gradient: "from-cyan-500 to-violet-500",
    },
    HeroSlide {
        before: "Draft",
        after: "Final",
        gradient: "from-emerald-500 to-teal-500",
    },
];

/// Small rounded chip linking into the app
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pill {
    pub icon: &'static str,
    pub text: &'static str,
}

pub const HERO_PILLS: &[Pill] = &[
    Pill {
        icon: "🎨",
        text: "AI Enhancement",
    },
    Pill {
        icon: "✂️",
        text: "Smart Crop",
    },
    Pill {
        icon: "🪄",
        text: "Background Removal",
    },
    Pill {
        icon: "⚡",
        text: "Batch Edit",
    },
];

/// Pills under the dashboard empty state
pub const EMPTY_STATE_PILLS: &[Pill] = HERO_PILLS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Ring,
    Square,
    Triangle,
}

/// Decorative outline drifting in the hero background
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingShape {
    pub kind: ShapeKind,
    pub size: u32,
    /// Left offset in percent
    pub x: u32,
    /// Top offset in percent
    pub y: u32,
    pub duration_s: f32,
    pub delay_s: f32,
}

impl FloatingShape {
    pub fn style(&self) -> String {
        format!(
            "left: {}%; top: {}%; animation: float-shape {}s ease-in-out infinite; animation-delay: {}s;",
            self.x, self.y, self.duration_s, self.delay_s
        )
    }
}

pub const FLOATING_SHAPES: &[FloatingShape] = &[
    FloatingShape {
        kind: ShapeKind::Ring,
        size: 80,
        x: 10,
        y: 20,
        duration_s: 25.0,
        delay_s: 0.0,
    },
    FloatingShape {
        kind: ShapeKind::Ring,
        size: 60,
        x: 85,
        y: 60,
        duration_s: 20.0,
        delay_s: 2.0,
    },
    FloatingShape {
        kind: ShapeKind::Square,
        size: 40,
        x: 75,
        y: 15,
        duration_s: 30.0,
        delay_s: 1.0,
    },
    FloatingShape {
        kind: ShapeKind::Square,
        size: 30,
        x: 20,
        y: 75,
        duration_s: 22.0,
        delay_s: 3.0,
    },
    FloatingShape {
        kind: ShapeKind::Triangle,
        size: 50,
        x: 60,
        y: 80,
        duration_s: 28.0,
        delay_s: 0.5,
    },
];

/// Footer link column
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinkGroup {
    pub title: &'static str,
    pub links: &'static [(&'static str, &'static str)],
}

pub const FOOTER_LINKS: &[LinkGroup] = &[
    LinkGroup {
        title: "Product",
        links: &[
            ("Features", "/#features"),
            ("Pricing", "/#pricing"),
            ("Dashboard", "/dashboard"),
        ],
    },
    LinkGroup {
        title: "Company",
        links: &[("About", "/#features"), ("Contact", "/#contact")],
    },
    LinkGroup {
        title: "Legal",
        links: &[("Privacy", "/privacy"), ("Terms", "/terms")],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_content() {
        let values: Vec<u64> = STATS.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![100_000, 10_000, 450_000, 98]);
        let suffixes: Vec<&str> = STATS.iter().map(|s| s.suffix).collect();
        assert_eq!(suffixes, vec!["+", "+", "+", "%"]);
    }

    #[test]
    fn test_six_features_and_tools() {
        assert_eq!(FEATURES.len(), 6);
        assert_eq!(PRO_TOOLS.len(), 6);
    }

    #[test]
    fn test_only_one_featured_plan() {
        assert_eq!(PLANS.iter().filter(|p| p.featured).count(), 1);
        assert!(PLANS[0].is_free());
        assert_eq!(PLANS[0].tagline(), "Perfect for getting started");
        assert_eq!(PLANS[1].tagline(), "Billed monthly");
    }

    #[test]
    fn test_plan_checkout_rules() {
        let free = PLANS[0];
        let pro = PLANS[1];
        assert!(!free.can_checkout(true, false));
        assert!(pro.can_checkout(true, false));
        assert!(!pro.can_checkout(false, false));
        assert!(!pro.can_checkout(true, true));
    }

    #[test]
    fn test_tool_glow() {
        assert_eq!(PRO_TOOLS[0].glow(), "rgba(249,115,22,0.4)");
        assert_eq!(PRO_TOOLS[1].glow(), "rgba(236,72,153,0.4)");
        assert_eq!(PRO_TOOLS[2].glow(), "rgba(139,92,246,0.4)");
    }

    #[test]
    fn test_floating_shape_style() {
        let style = FLOATING_SHAPES[4].style();
        assert!(style.starts_with("left: 60%; top: 80%;"));
        assert!(style.contains("float-shape 28s"));
        assert!(style.contains("animation-delay: 0.5s"));
    }
}
