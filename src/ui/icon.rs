use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name under `/icons` (without the .svg extension)
    name: &'static str,
    /// CSS classes for sizing and colour
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icon names shared across pages
#[allow(dead_code)]
pub mod icons {
    pub const ARROW_LEFT: &str = "arrow-left";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CHECK: &str = "check";
    pub const X: &str = "x";
    pub const MENU: &str = "menu";
    pub const PLUS: &str = "plus";
    pub const SPARKLES: &str = "sparkles";
    pub const IMAGE: &str = "image";
    pub const MAIL: &str = "mail";
    pub const MONITOR: &str = "monitor";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const LOADER: &str = "loader";
    pub const CROWN: &str = "crown";
    pub const ZAP: &str = "zap";
}
