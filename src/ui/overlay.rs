//! Overlay tracking
//!
//! Modals register here while they are open so that chrome such as the
//! floating header can step aside without inspecting the DOM.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct OverlayContext {
    open_count: RwSignal<u32>,
}

impl OverlayContext {
    pub fn open(&self) {
        self.open_count.update(|n| *n = n.saturating_add(1));
    }

    pub fn close(&self) {
        self.open_count.try_update(|n| *n = n.saturating_sub(1));
    }

    /// Whether any overlay is open (tracked)
    pub fn is_open(&self) -> bool {
        self.open_count.get() > 0
    }
}

/// Provide overlay context to the application
pub fn provide_overlay_context() -> OverlayContext {
    let ctx = OverlayContext {
        open_count: RwSignal::new(0),
    };
    provide_context(ctx);
    ctx
}

/// Use overlay context from anywhere in the component tree
pub fn use_overlay_context() -> OverlayContext {
    use_context::<OverlayContext>().expect("OverlayContext should be provided")
}

/// Keep the overlay count in step with `is_open` for the lifetime of the
/// calling component.
pub fn register_overlay(is_open: Signal<bool>) {
    let Some(ctx) = use_context::<OverlayContext>() else {
        return;
    };
    let registered = StoredValue::new(false);

    Effect::new(move |_| {
        let open = is_open.get();
        if open != registered.get_value() {
            registered.set_value(open);
            if open {
                ctx.open();
            } else {
                ctx.close();
            }
        }
    });

    on_cleanup(move || {
        if registered.try_get_value() == Some(true) {
            ctx.close();
        }
    });
}
