use leptos::html::ElementType;
use leptos::prelude::*;
use leptos::wasm_bindgen::JsCast;

use crate::core::motion::RevealTracker;

/// Watch a node and report once it has entered the viewport.
///
/// Returns the `NodeRef` to bind on the observed element and a flag that
/// flips to `true` the first time at least `threshold` of the element is
/// visible. The flag never turns back off. When the browser has no
/// `IntersectionObserver`, the flag turns on as soon as the node mounts.
pub fn use_visibility_observer<E>(threshold: f64) -> (NodeRef<E>, Signal<bool>)
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    let node_ref = NodeRef::<E>::new();
    let visible = RwSignal::new(false);
    let tracker = StoredValue::new(RevealTracker::new(threshold));

    #[cfg(not(feature = "ssr"))]
    {
        let handle = StoredValue::new_local(None::<client::ObserverHandle>);

        Effect::new(move |_| {
            let Some(element) = node_ref.get() else {
                return;
            };
            if tracker.try_update_value(|t| t.attach()) != Some(true) {
                return;
            }

            let threshold = tracker.with_value(|t| t.threshold());
            match client::observe(element.unchecked_ref(), threshold, tracker, visible) {
                Ok(observer) => handle.set_value(Some(observer)),
                Err(reason) => {
                    leptos::logging::warn!("reveal shown without observer: {reason}");
                    tracker.update_value(|t| t.fail_open());
                    visible.set(true);
                }
            }
        });

        on_cleanup(move || {
            tracker.try_update_value(|t| t.detach());
            if let Some(Some(observer)) = handle.try_update_value(|h| h.take()) {
                observer.disconnect();
            }
        });
    }

    #[cfg(feature = "ssr")]
    let _ = tracker;

    (node_ref, visible.read_only().into())
}

#[cfg(not(feature = "ssr"))]
mod client {
    use leptos::prelude::*;
    use leptos::wasm_bindgen::closure::Closure;
    use leptos::wasm_bindgen::{JsCast, JsValue};
    use leptos::web_sys::{
        self, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    };

    use crate::core::motion::{IntersectionSample, RevealTracker};

    type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    /// Live observer plus the closure it calls back into
    pub(super) struct ObserverHandle {
        observer: IntersectionObserver,
        _callback: EntriesCallback,
    }

    impl ObserverHandle {
        pub(super) fn disconnect(&self) {
            self.observer.disconnect();
        }
    }

    pub(super) fn observe(
        element: &Element,
        threshold: f64,
        tracker: StoredValue<RevealTracker>,
        visible: RwSignal<bool>,
    ) -> Result<ObserverHandle, String> {
        let window = web_sys::window().ok_or("no window")?;
        let supported = js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false);
        if !supported {
            return Err("IntersectionObserver unavailable".to_string());
        }

        let callback: EntriesCallback = Closure::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let sample =
                        IntersectionSample::new(entry.intersection_ratio(), entry.is_intersecting());

                    // None once the owning component is gone
                    if tracker.try_update_value(|t| t.record(sample)) == Some(true) {
                        let _ = visible.try_set(true);
                        observer.disconnect();
                        break;
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| format!("{e:?}"))?;
        observer.observe(element);

        Ok(ObserverHandle {
            observer,
            _callback: callback,
        })
    }
}
