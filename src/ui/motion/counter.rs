use leptos::prelude::*;

use super::use_motion_config;
use crate::core::motion::{Activation, CounterAnimation};

/// Handle returned by `use_animated_counter`
#[derive(Clone, Copy)]
pub struct AnimatedCounter {
    /// Current displayed value, `0` until activated
    pub value: Signal<u64>,
    /// Start counting with `true`. Repeated or `false` calls are no-ops.
    pub set_active: Callback<bool>,
}

/// Count from 0 up to `target` over roughly `duration_ms` once activated.
///
/// A single interval drives the count; it is dropped when the final value is
/// shown and when the owning component is disposed.
pub fn use_animated_counter(target: u64, duration_ms: u32) -> AnimatedCounter {
    let tick_ms = use_motion_config().counter_tick_ms;
    let counter = StoredValue::new(CounterAnimation::new(target, duration_ms, tick_ms));
    let value = RwSignal::new(0u64);

    #[cfg(not(feature = "ssr"))]
    let interval = StoredValue::new_local(None::<gloo_timers::callback::Interval>);

    let set_active = Callback::new(move |active: bool| {
        if !active {
            return;
        }

        match counter.try_update_value(|c| c.activate()) {
            Some(Activation::Started) => {
                #[cfg(not(feature = "ssr"))]
                interval.set_value(Some(start_ticking(tick_ms, counter, value, interval)));
            }
            Some(Activation::Completed) => {
                let _ = value.try_set(counter.with_value(|c| c.value()));
            }
            Some(Activation::AlreadyActive) | None => {}
        }
    });

    on_cleanup(move || {
        counter.try_update_value(|c| c.cancel());
        #[cfg(not(feature = "ssr"))]
        interval.try_update_value(|i| i.take());
    });

    AnimatedCounter {
        value: value.read_only().into(),
        set_active,
    }
}

#[cfg(not(feature = "ssr"))]
fn start_ticking(
    tick_ms: u32,
    counter: StoredValue<CounterAnimation>,
    value: RwSignal<u64>,
    interval: StoredValue<Option<gloo_timers::callback::Interval>, LocalStorage>,
) -> gloo_timers::callback::Interval {
    use crate::core::motion::Tick;
    use std::time::Duration;

    gloo_timers::callback::Interval::new(tick_ms.max(1), move || {
        // A cancelled or disposed counter reports Ignored / None
        match counter.try_update_value(|c| c.tick()) {
            Some(Tick::Advanced(current)) => {
                let _ = value.try_set(current);
            }
            Some(Tick::Finished(current)) => {
                let _ = value.try_set(current);
                // The interval cannot drop itself from inside its own callback
                set_timeout(
                    move || {
                        interval.try_update_value(|i| i.take());
                    },
                    Duration::ZERO,
                );
            }
            Some(Tick::Ignored) | None => {}
        }
    })
}
