//! Reactive motion hooks
//!
//! Thin Leptos bindings around the state machines in `core::motion`:
//! - `use_visibility_observer` - one-shot "has been seen" flag for a node
//! - `use_animated_counter` - 0 to target count-up driven by a single interval
//! - `use_delayed_flag` - flag that turns on once after a delay
//! - `use_slide_cycle` - auto-rotating slide index
//!
//! Every hook releases its browser resources when the owning component is
//! disposed. On the server nothing is scheduled and flags stay off.

mod counter;
mod observer;
mod timers;

pub use counter::{AnimatedCounter, use_animated_counter};
pub use observer::use_visibility_observer;
pub use timers::{SlideCycleHandle, use_delayed_flag, use_slide_cycle};

use leptos::prelude::*;

use crate::core::motion::MotionConfig;

/// Choose and provide the motion preset for the app.
///
/// Users with `prefers-reduced-motion: reduce` get `MotionConfig::REDUCED`.
pub fn provide_motion_config() -> MotionConfig {
    let config = if prefers_reduced_motion() {
        MotionConfig::REDUCED
    } else {
        MotionConfig::DEFAULT
    };

    provide_context(config);
    config
}

/// Motion preset from context, falling back to the default timings
pub fn use_motion_config() -> MotionConfig {
    use_context::<MotionConfig>().unwrap_or_default()
}

fn prefers_reduced_motion() -> bool {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = leptos::web_sys::window() {
            if let Ok(Some(query)) = window.match_media("(prefers-reduced-motion: reduce)") {
                return query.matches();
            }
        }
    }
    false
}
