//! Staggered entrance delays for lists sharing one visibility flag

/// Per-item delay schedule: item `i` starts `base_ms + i * step_ms` after the
/// shared flag turns on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct RevealSchedule {
    pub base_ms: u32,
    pub step_ms: u32,
}

impl RevealSchedule {
    pub const fn new(step_ms: u32) -> Self {
        Self {
            base_ms: 0,
            step_ms,
        }
    }

    pub const fn with_base(base_ms: u32, step_ms: u32) -> Self {
        Self { base_ms, step_ms }
    }

    pub fn delay_ms(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.base_ms
            .saturating_add(index.saturating_mul(self.step_ms))
    }

    pub fn delays(&self, len: usize) -> Vec<u32> {
        (0..len).map(|i| self.delay_ms(i)).collect()
    }

    /// Inline style for item `index`. Hidden items need no delay.
    pub fn transition_delay(&self, index: usize, visible: bool) -> String {
        delay_style(self.delay_ms(index), visible)
    }
}

/// Inline `transition-delay` for a single block, applied only once visible
pub fn delay_style(delay_ms: u32, visible: bool) -> String {
    if visible {
        format!("transition-delay: {delay_ms}ms")
    } else {
        String::new()
    }
}

/// How far hidden content sits below (or above) its final position
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevealOffset {
    /// translate-y-4
    Small,
    /// translate-y-8
    #[default]
    Medium,
    /// translate-y-10
    Large,
    /// translate-y-16, for big bento cards
    ExtraLarge,
    /// -translate-y-8, for badges sliding down into place
    Above,
}

impl RevealOffset {
    fn hidden_class(&self) -> &'static str {
        match self {
            RevealOffset::Small => "opacity-0 translate-y-4",
            RevealOffset::Medium => "opacity-0 translate-y-8",
            RevealOffset::Large => "opacity-0 translate-y-10",
            RevealOffset::ExtraLarge => "opacity-0 translate-y-16",
            RevealOffset::Above => "opacity-0 -translate-y-8",
        }
    }
}

/// Tailwind classes for the shown / hidden state of a reveal
pub fn reveal_classes(visible: bool, offset: RevealOffset) -> &'static str {
    if visible {
        "opacity-100 translate-y-0"
    } else {
        offset.hidden_class()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::motion::MotionConfig;

    #[test]
    fn test_delay_is_base_plus_index_times_step() {
        let schedule = RevealSchedule::with_base(1200, 100);
        for i in 0..10 {
            assert_eq!(schedule.delay_ms(i), 1200 + i as u32 * 100);
        }
    }

    #[test]
    fn test_delays_strictly_increase_with_positive_step() {
        let delays = RevealSchedule::new(80).delays(6);
        assert_eq!(delays, vec![0, 80, 160, 240, 320, 400]);
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_zero_step_keeps_everything_at_base() {
        let schedule = RevealSchedule::with_base(300, 0);
        assert!(schedule.delays(4).iter().all(|&d| d == 300));
    }

    #[test]
    fn test_huge_index_saturates() {
        let schedule = RevealSchedule::with_base(10, 1000);
        assert_eq!(schedule.delay_ms(usize::MAX), u32::MAX);
    }

    #[test]
    fn test_transition_delay_only_when_visible() {
        let schedule = RevealSchedule::new(120);
        assert_eq!(schedule.transition_delay(2, true), "transition-delay: 240ms");
        assert_eq!(schedule.transition_delay(2, false), "");
    }

    #[test]
    fn test_delay_style_for_single_block() {
        assert_eq!(delay_style(700, true), "transition-delay: 700ms");
        assert_eq!(delay_style(700, false), "");
        assert_eq!(
            delay_style(MotionConfig::REDUCED.hero_actions_delay_ms, true),
            "transition-delay: 0ms"
        );
    }

    #[test]
    fn test_reveal_classes() {
        assert_eq!(
            reveal_classes(true, RevealOffset::Large),
            "opacity-100 translate-y-0"
        );
        assert_eq!(
            reveal_classes(false, RevealOffset::Large),
            "opacity-0 translate-y-10"
        );
        assert_eq!(
            reveal_classes(false, RevealOffset::Above),
            "opacity-0 -translate-y-8"
        );
    }
}
