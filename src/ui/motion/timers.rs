use leptos::prelude::*;

use crate::core::motion::SlideCycle;

/// Flag that turns on once, `delay_ms` after the component mounts.
///
/// Used for entrances that are timed rather than scroll-driven.
pub fn use_delayed_flag(delay_ms: u32) -> Signal<bool> {
    let flag = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::callback::Timeout;

        let timeout = StoredValue::new_local(None::<Timeout>);

        Effect::new(move |_| {
            if delay_ms == 0 {
                flag.set(true);
                return;
            }
            timeout.set_value(Some(Timeout::new(delay_ms, move || {
                let _ = flag.try_set(true);
            })));
        });

        on_cleanup(move || {
            timeout.try_update_value(|t| t.take());
        });
    }

    #[cfg(feature = "ssr")]
    let _ = delay_ms;

    flag.read_only().into()
}

/// Handle returned by `use_slide_cycle`
#[derive(Clone, Copy)]
pub struct SlideCycleHandle {
    pub active: Signal<usize>,
    pub select: Callback<usize>,
}

/// Rotate through `len` slides every `interval_ms`; `select` jumps directly.
pub fn use_slide_cycle(len: usize, interval_ms: u32) -> SlideCycleHandle {
    let cycle = StoredValue::new(SlideCycle::new(len));
    let active = RwSignal::new(0usize);

    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::callback::Interval;

        let interval = StoredValue::new_local(None::<Interval>);

        Effect::new(move |_| {
            if len < 2 {
                return;
            }
            interval.set_value(Some(Interval::new(interval_ms.max(1), move || {
                if let Some(index) = cycle.try_update_value(|c| c.advance()) {
                    let _ = active.try_set(index);
                }
            })));
        });

        on_cleanup(move || {
            interval.try_update_value(|i| i.take());
        });
    }

    #[cfg(feature = "ssr")]
    let _ = interval_ms;

    let select = Callback::new(move |index: usize| {
        if let Some(index) = cycle.try_update_value(|c| c.select(index)) {
            active.set(index);
        }
    });

    SlideCycleHandle {
        active: active.read_only().into(),
        select,
    }
}
