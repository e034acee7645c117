//! Linear count-up animation
//!
//! `CounterAnimation` advances a value from 0 to a target over a fixed number
//! of ticks. It owns no timer: the reactive layer calls `tick()` from a single
//! interval and stops it when `tick()` reports `Finished` or `Ignored`.

use super::config::{DEFAULT_COUNTER_DURATION_MS, DEFAULT_COUNTER_TICK_MS};

/// Counter lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CounterPhase {
    #[default]
    Idle,
    Running,
    Finished,
    /// Owning component was torn down
    Cancelled,
}

/// Result of an activation request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// The caller must start exactly one tick source
    Started,
    /// A tick source already exists (or the counter is done); do nothing
    AlreadyActive,
    /// The target was reached without ticking (target = 0)
    Completed,
}

/// Result of a single tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// New intermediate value; keep ticking
    Advanced(u64),
    /// Final value, always equal to the target; stop ticking
    Finished(u64),
    /// Counter is not running; stop ticking
    Ignored,
}

impl Tick {
    pub fn should_continue(&self) -> bool {
        matches!(self, Tick::Advanced(_))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    steps: u32,
    step: u32,
    value: u64,
    phase: CounterPhase,
}

impl CounterAnimation {
    pub fn new(target: u64, duration_ms: u32, tick_ms: u32) -> Self {
        let tick_ms = tick_ms.max(1);
        // Final tick lands at or before `duration_ms`
        let steps = (duration_ms / tick_ms).max(1);

        Self {
            target,
            steps,
            step: 0,
            value: 0,
            phase: CounterPhase::Idle,
        }
    }

    /// Counter with the default 2s duration and 60ms ticks
    pub fn with_target(target: u64) -> Self {
        Self::new(target, DEFAULT_COUNTER_DURATION_MS, DEFAULT_COUNTER_TICK_MS)
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == CounterPhase::Running
    }

    /// Start the animation. Repeated calls never start a second tick source.
    pub fn activate(&mut self) -> Activation {
        if self.phase != CounterPhase::Idle {
            return Activation::AlreadyActive;
        }

        if self.target == 0 {
            self.value = 0;
            self.phase = CounterPhase::Finished;
            return Activation::Completed;
        }

        self.phase = CounterPhase::Running;
        Activation::Started
    }

    /// Advance one step.
    pub fn tick(&mut self) -> Tick {
        if self.phase != CounterPhase::Running {
            return Tick::Ignored;
        }

        self.step += 1;
        if self.step >= self.steps {
            self.value = self.target;
            self.phase = CounterPhase::Finished;
            return Tick::Finished(self.value);
        }

        self.value = self.value_at(self.step).max(self.value);
        Tick::Advanced(self.value)
    }

    /// Stop the animation for good. Later ticks are ignored and the value is
    /// frozen where it stands.
    pub fn cancel(&mut self) {
        if matches!(self.phase, CounterPhase::Idle | CounterPhase::Running) {
            self.phase = CounterPhase::Cancelled;
        }
    }

    /// `round(target * step / steps)` without floating point residue
    fn value_at(&self, step: u32) -> u64 {
        let numerator = self.target as u128 * step as u128 * 2 + self.steps as u128;
        let rounded = numerator / (self.steps as u128 * 2);
        (rounded as u64).min(self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(counter: &mut CounterAnimation) -> Vec<u64> {
        let mut values = Vec::new();
        loop {
            match counter.tick() {
                Tick::Advanced(v) => values.push(v),
                Tick::Finished(v) => {
                    values.push(v);
                    break;
                }
                Tick::Ignored => break,
            }
        }
        values
    }

    #[test]
    fn test_steps_from_duration() {
        assert_eq!(CounterAnimation::new(100, 2000, 60).steps(), 33);
        assert_eq!(CounterAnimation::new(100, 2000, 50).steps(), 40);
        assert_eq!(CounterAnimation::new(100, 0, 60).steps(), 1);
        assert_eq!(CounterAnimation::new(100, 100, 0).steps(), 100);
    }

    #[test]
    fn test_reaches_target_within_duration() {
        for (duration, tick) in [(2000, 60), (2000, 50), (1000, 70), (59, 60)] {
            let mut counter = CounterAnimation::new(98, duration, tick);
            counter.activate();
            let mut elapsed = 0;
            while elapsed + tick <= duration.max(tick) && counter.is_running() {
                elapsed += tick;
                counter.tick();
            }
            assert_eq!(counter.value(), 98, "duration={duration} tick={tick}");
            assert_eq!(counter.phase(), CounterPhase::Finished);
        }
    }

    #[test]
    fn test_idle_counter_does_not_tick() {
        let mut counter = CounterAnimation::with_target(98);
        assert_eq!(counter.tick(), Tick::Ignored);
        assert_eq!(counter.value(), 0);
    }

    #[test]
    fn test_lands_exactly_on_target() {
        for target in [1, 7, 98, 10_000, 100_000, 450_000, u32::MAX as u64] {
            let mut counter = CounterAnimation::new(target, 2000, 60);
            assert_eq!(counter.activate(), Activation::Started);
            let values = run_to_end(&mut counter);
            assert_eq!(values.len(), counter.steps() as usize);
            assert_eq!(*values.last().unwrap(), target);
            assert_eq!(counter.value(), target);
            assert_eq!(counter.phase(), CounterPhase::Finished);
        }
    }

    #[test]
    fn test_values_are_monotonic_and_bounded() {
        let mut counter = CounterAnimation::new(98, 2000, 60);
        counter.activate();
        let values = run_to_end(&mut counter);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert!(values.iter().all(|&v| v <= 98));
    }

    #[test]
    fn test_zero_target_completes_immediately() {
        let mut counter = CounterAnimation::new(0, 2000, 60);
        assert_eq!(counter.activate(), Activation::Completed);
        assert_eq!(counter.value(), 0);
        assert_eq!(counter.phase(), CounterPhase::Finished);
        assert_eq!(counter.tick(), Tick::Ignored);
    }

    #[test]
    fn test_activation_is_idempotent() {
        let mut once = CounterAnimation::new(450_000, 2000, 60);
        once.activate();
        let expected = run_to_end(&mut once);

        let mut twice = CounterAnimation::new(450_000, 2000, 60);
        assert_eq!(twice.activate(), Activation::Started);
        assert_eq!(twice.activate(), Activation::AlreadyActive);
        let actual = run_to_end(&mut twice);

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_activation_after_finish_does_not_restart() {
        let mut counter = CounterAnimation::new(10, 120, 60);
        counter.activate();
        run_to_end(&mut counter);
        assert_eq!(counter.activate(), Activation::AlreadyActive);
        assert_eq!(counter.tick(), Tick::Ignored);
        assert_eq!(counter.value(), 10);
    }

    #[test]
    fn test_cancel_at_any_tick_freezes_state() {
        let steps = CounterAnimation::new(100_000, 2000, 60).steps();
        for cancel_at in 0..=steps {
            let mut counter = CounterAnimation::new(100_000, 2000, 60);
            counter.activate();
            for _ in 0..cancel_at {
                counter.tick();
            }
            let frozen = counter.value();
            counter.cancel();
            for _ in 0..5 {
                assert_eq!(counter.tick(), Tick::Ignored);
            }
            assert_eq!(counter.value(), frozen);
            assert_eq!(counter.activate(), Activation::AlreadyActive);
        }
    }

    #[test]
    fn test_cancel_keeps_finished_phase() {
        let mut counter = CounterAnimation::new(5, 60, 60);
        counter.activate();
        assert_eq!(counter.tick(), Tick::Finished(5));
        counter.cancel();
        assert_eq!(counter.phase(), CounterPhase::Finished);
    }

    #[test]
    fn test_should_continue() {
        assert!(Tick::Advanced(3).should_continue());
        assert!(!Tick::Finished(3).should_continue());
        assert!(!Tick::Ignored.should_continue());
    }
}
