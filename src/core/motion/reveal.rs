//! One-shot visibility tracking for scroll-triggered reveals
//!
//! `RevealTracker` is the state machine behind `use_visibility_observer`:
//! - `Unobserved` until a rendered node is attached
//! - `Observing` while the browser reports intersection samples
//! - `Triggered` after the first qualifying sample, and forever after
//!
//! The tracker holds no browser handles, so the reactive layer can drive it
//! from an `IntersectionObserver` callback while tests drive it directly.

use super::config::DEFAULT_REVEAL_THRESHOLD;

/// Slack for pixel-rounded ratios the browser reports at a threshold crossing
pub const RATIO_TOLERANCE: f64 = 0.01;

/// Lifecycle of an observed element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevealPhase {
    /// No node attached yet (or the watch was torn down before triggering)
    #[default]
    Unobserved,
    /// A viewport watch is registered and waiting for a qualifying sample
    Observing,
    /// The element has been visible at least once. Terminal.
    Triggered,
}

/// A single intersection report for the observed element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample {
    /// Fraction of the element's area inside the viewport (0.0 - 1.0)
    pub ratio: f64,
    /// Whether the browser considers the element intersecting at all
    pub is_intersecting: bool,
}

impl IntersectionSample {
    pub fn new(ratio: f64, is_intersecting: bool) -> Self {
        Self {
            ratio,
            is_intersecting,
        }
    }

    /// Sample for an element fully outside the viewport
    pub fn hidden() -> Self {
        Self::new(0.0, false)
    }
}

/// Reveal-once visibility state for one element
#[derive(Clone, Debug, PartialEq)]
pub struct RevealTracker {
    threshold: f64,
    phase: RevealPhase,
}

impl RevealTracker {
    /// Create a tracker with the given intersection threshold.
    ///
    /// The threshold is clamped into `[0, 1]`; a NaN threshold falls back to
    /// the default reveal threshold.
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() {
            DEFAULT_REVEAL_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };

        Self {
            threshold,
            phase: RevealPhase::Unobserved,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase == RevealPhase::Triggered
    }

    pub fn is_observing(&self) -> bool {
        self.phase == RevealPhase::Observing
    }

    /// Mark the handle as attached to a live node.
    ///
    /// Returns `true` when the caller should register a viewport watch.
    pub fn attach(&mut self) -> bool {
        match self.phase {
            RevealPhase::Unobserved => {
                self.phase = RevealPhase::Observing;
                true
            }
            RevealPhase::Observing | RevealPhase::Triggered => false,
        }
    }

    /// Feed an intersection sample.
    ///
    /// Returns `true` only for the sample that triggers the reveal; the caller
    /// may stop observing at that point.
    pub fn record(&mut self, sample: IntersectionSample) -> bool {
        if self.phase != RevealPhase::Observing {
            return false;
        }

        // Edge-adjacent elements report ratio 0 while intersecting, which only
        // counts for a zero threshold. A crossing the browser reports as
        // intersecting may come in a rounding step under the threshold.
        let qualifies = if sample.is_intersecting {
            sample.ratio + RATIO_TOLERANCE >= self.threshold
        } else {
            sample.ratio > 0.0 && sample.ratio >= self.threshold
        };
        if qualifies {
            self.phase = RevealPhase::Triggered;
            return true;
        }

        false
    }

    /// The runtime cannot detect intersections: treat the element as visible.
    pub fn fail_open(&mut self) {
        self.phase = RevealPhase::Triggered;
    }

    /// Tear down the watch. A triggered tracker stays triggered.
    pub fn detach(&mut self) {
        if self.phase == RevealPhase::Observing {
            self.phase = RevealPhase::Unobserved;
        }
    }
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observing(threshold: f64) -> RevealTracker {
        let mut tracker = RevealTracker::new(threshold);
        assert!(tracker.attach());
        tracker
    }

    #[test]
    fn test_starts_hidden_and_unobserved() {
        let tracker = RevealTracker::default();
        assert_eq!(tracker.phase(), RevealPhase::Unobserved);
        assert!(!tracker.is_visible());
        assert_eq!(tracker.threshold(), DEFAULT_REVEAL_THRESHOLD);
    }

    #[test]
    fn test_attach_only_registers_once() {
        let mut tracker = RevealTracker::new(0.1);
        assert!(tracker.attach());
        assert!(!tracker.attach());
        assert!(tracker.is_observing());
    }

    #[test]
    fn test_samples_below_threshold_do_not_trigger() {
        let mut tracker = observing(0.2);
        assert!(!tracker.record(IntersectionSample::hidden()));
        assert!(!tracker.record(IntersectionSample::new(0.15, true)));
        assert!(!tracker.is_visible());
    }

    #[test]
    fn test_rounded_crossing_just_under_threshold_triggers() {
        let mut tracker = observing(0.1);
        assert!(tracker.record(IntersectionSample::new(0.0999, true)));
        assert!(tracker.is_visible());
    }

    #[test]
    fn test_rounding_slack_needs_intersection() {
        let mut tracker = observing(0.1);
        assert!(!tracker.record(IntersectionSample::new(0.0999, false)));
        assert!(!tracker.is_visible());
    }

    #[test]
    fn test_sample_at_threshold_triggers() {
        let mut tracker = observing(0.2);
        assert!(tracker.record(IntersectionSample::new(0.2, true)));
        assert!(tracker.is_visible());
    }

    #[test]
    fn test_trigger_is_terminal() {
        let mut tracker = observing(0.1);
        assert!(tracker.record(IntersectionSample::new(0.5, true)));

        // Scrolling away never hides the element again
        assert!(!tracker.record(IntersectionSample::hidden()));
        tracker.detach();
        assert!(!tracker.attach());
        assert!(tracker.is_visible());
    }

    #[test]
    fn test_unattached_tracker_ignores_samples() {
        let mut tracker = RevealTracker::new(0.1);
        assert!(!tracker.record(IntersectionSample::new(1.0, true)));
        assert!(!tracker.is_visible());
    }

    #[test]
    fn test_zero_threshold_needs_real_intersection() {
        let mut tracker = observing(0.0);
        assert!(!tracker.record(IntersectionSample::hidden()));
        assert!(tracker.record(IntersectionSample::new(0.0, true)));
    }

    #[test]
    fn test_fail_open_reveals_immediately() {
        let mut tracker = RevealTracker::new(0.1);
        tracker.fail_open();
        assert!(tracker.is_visible());
    }

    #[test]
    fn test_detach_before_trigger_resets() {
        let mut tracker = observing(0.1);
        tracker.detach();
        assert_eq!(tracker.phase(), RevealPhase::Unobserved);
        assert!(!tracker.record(IntersectionSample::new(1.0, true)));
    }

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(RevealTracker::new(-1.0).threshold(), 0.0);
        assert_eq!(RevealTracker::new(3.0).threshold(), 1.0);
        assert_eq!(
            RevealTracker::new(f64::NAN).threshold(),
            DEFAULT_REVEAL_THRESHOLD
        );
    }

    #[test]
    fn test_visible_iff_some_ratio_reached_threshold() {
        let thresholds = [0.0, 0.1, 0.25, 0.5, 1.0];
        let traces: [&[f64]; 4] = [
            &[0.0, 0.05, 0.0],
            &[0.0, 0.3, 0.0],
            &[0.6, 0.2],
            &[0.9, 1.0],
        ];

        for &threshold in &thresholds {
            for trace in traces {
                let mut tracker = observing(threshold);
                let mut reached = false;
                for &ratio in trace {
                    let sample = IntersectionSample::new(ratio, ratio > 0.0);
                    tracker.record(sample);
                    reached |= ratio > 0.0 && ratio >= threshold;
                    assert_eq!(tracker.is_visible(), reached);
                }
            }
        }
    }
}
