//! Named timing constants for entrance animations
//!
//! Every reveal threshold, stagger increment and counter duration used by the
//! site lives here, so cascades stay consistent across sections.

/// Fraction of an element that must be on screen before cards reveal
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

/// Fraction used for whole sections (CTA, contact)
pub const SECTION_REVEAL_THRESHOLD: f64 = 0.2;

/// Total run time of an animated counter
pub const DEFAULT_COUNTER_DURATION_MS: u32 = 2000;

/// Interval between counter ticks
pub const DEFAULT_COUNTER_TICK_MS: u32 = 60;

/// Animation timing configuration shared by every landing section
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    /// Intersection threshold for individual cards
    pub reveal_threshold: f64,
    /// Intersection threshold for full-width sections
    pub section_threshold: f64,
    /// Counter run time
    pub counter_duration_ms: u32,
    /// Counter tick interval
    pub counter_tick_ms: u32,
    /// Per-item delay for feature cards
    pub feature_stagger_ms: u32,
    /// Per-item delay for the pro tools grid
    pub tool_stagger_ms: u32,
    /// Per-item delay for feature pills
    pub pill_stagger_ms: u32,
    /// Base delay before hero pills appear (after the headline)
    pub hero_pill_base_ms: u32,
    /// Base delay before empty-state pills appear
    pub empty_state_pill_base_ms: u32,
    /// Per-word delay for split text reveals
    pub word_stagger_ms: u32,
    /// Delay before the first headline line starts revealing
    pub headline_delay_ms: u32,
    /// Delay before the second headline line starts revealing
    pub headline_accent_delay_ms: u32,
    /// Delay before the dashboard empty state fades in
    pub empty_state_delay_ms: u32,
    /// Hero paragraph under the headline
    pub hero_subtitle_delay_ms: u32,
    /// Hero call-to-action buttons
    pub hero_actions_delay_ms: u32,
    /// Hero demo window
    pub hero_showcase_delay_ms: u32,
    /// Badge at the top of a revealed section
    pub section_badge_delay_ms: u32,
    /// First heading line (or main block) of a revealed section
    pub section_heading_delay_ms: u32,
    /// Accent heading line of a revealed section
    pub section_accent_delay_ms: u32,
    /// Body copy under a section heading
    pub section_body_delay_ms: u32,
    /// Subtitle under the dashboard heading
    pub dashboard_subtitle_delay_ms: u32,
    /// Hero demo slide rotation interval
    pub slide_interval_ms: u32,
}

impl MotionConfig {
    pub const DEFAULT: MotionConfig = MotionConfig {
        reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
        section_threshold: SECTION_REVEAL_THRESHOLD,
        counter_duration_ms: DEFAULT_COUNTER_DURATION_MS,
        counter_tick_ms: DEFAULT_COUNTER_TICK_MS,
        feature_stagger_ms: 80,
        tool_stagger_ms: 120,
        pill_stagger_ms: 100,
        hero_pill_base_ms: 1200,
        empty_state_pill_base_ms: 800,
        word_stagger_ms: 80,
        headline_delay_ms: 200,
        headline_accent_delay_ms: 500,
        empty_state_delay_ms: 300,
        hero_subtitle_delay_ms: 700,
        hero_actions_delay_ms: 1000,
        hero_showcase_delay_ms: 500,
        section_badge_delay_ms: 200,
        section_heading_delay_ms: 300,
        section_accent_delay_ms: 500,
        section_body_delay_ms: 700,
        dashboard_subtitle_delay_ms: 500,
        slide_interval_ms: 4000,
    };

    /// Configuration with every delay collapsed to zero, for users who asked
    /// the system to reduce motion.
    pub const REDUCED: MotionConfig = MotionConfig {
        reveal_threshold: 0.0,
        section_threshold: 0.0,
        counter_duration_ms: 0,
        counter_tick_ms: DEFAULT_COUNTER_TICK_MS,
        feature_stagger_ms: 0,
        tool_stagger_ms: 0,
        pill_stagger_ms: 0,
        hero_pill_base_ms: 0,
        empty_state_pill_base_ms: 0,
        word_stagger_ms: 0,
        headline_delay_ms: 0,
        headline_accent_delay_ms: 0,
        empty_state_delay_ms: 0,
        hero_subtitle_delay_ms: 0,
        hero_actions_delay_ms: 0,
        hero_showcase_delay_ms: 0,
        section_badge_delay_ms: 0,
        section_heading_delay_ms: 0,
        section_accent_delay_ms: 0,
        section_body_delay_ms: 0,
        dashboard_subtitle_delay_ms: 0,
        slide_interval_ms: 4000,
    };
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_observed_timings() {
        let config = MotionConfig::default();
        assert_eq!(config.reveal_threshold, 0.1);
        assert_eq!(config.section_threshold, 0.2);
        assert_eq!(config.counter_duration_ms, 2000);
        assert_eq!(config.feature_stagger_ms, 80);
        assert_eq!(config.tool_stagger_ms, 120);
        assert_eq!(config.hero_pill_base_ms, 1200);
        assert!(config.headline_delay_ms < config.headline_accent_delay_ms);
        assert!(config.headline_accent_delay_ms < config.hero_pill_base_ms);
    }

    #[test]
    fn test_block_delays_cascade_in_reading_order() {
        let config = MotionConfig::DEFAULT;
        assert!(config.hero_subtitle_delay_ms < config.hero_actions_delay_ms);
        assert!(config.section_badge_delay_ms < config.section_heading_delay_ms);
        assert!(config.section_heading_delay_ms < config.section_accent_delay_ms);
        assert!(config.section_accent_delay_ms < config.section_body_delay_ms);
        assert!(config.headline_delay_ms < config.dashboard_subtitle_delay_ms);
    }

    #[test]
    fn test_reduced_removes_delays() {
        let config = MotionConfig::REDUCED;
        assert_eq!(config.feature_stagger_ms, 0);
        assert_eq!(config.hero_pill_base_ms, 0);
        assert_eq!(config.counter_duration_ms, 0);
        for delay in [
            config.hero_subtitle_delay_ms,
            config.hero_actions_delay_ms,
            config.hero_showcase_delay_ms,
            config.section_badge_delay_ms,
            config.section_heading_delay_ms,
            config.section_accent_delay_ms,
            config.section_body_delay_ms,
            config.dashboard_subtitle_delay_ms,
        ] {
            assert_eq!(delay, 0);
        }
    }
}
