#[cfg(test)]
mod tests {
    use crate::core::content::{EMPTY_STATE_PILLS, FEATURES, HERO_PILLS, STATS};
    use crate::core::format::format_stat;
    use crate::core::motion::{
        Activation, CounterAnimation, IntersectionSample, MotionConfig, RevealSchedule,
        RevealTracker, Tick,
    };

    /// A stat card: one reveal tracker gating one counter
    struct StatCard {
        tracker: RevealTracker,
        counter: CounterAnimation,
        suffix: &'static str,
        ticking: bool,
    }

    impl StatCard {
        fn new(value: u64, suffix: &'static str, config: &MotionConfig) -> Self {
            Self {
                tracker: RevealTracker::new(config.reveal_threshold),
                counter: CounterAnimation::new(
                    value,
                    config.counter_duration_ms,
                    config.counter_tick_ms,
                ),
                suffix,
                ticking: false,
            }
        }

        fn scroll_into_view(&mut self) {
            self.tracker.attach();
            if self.tracker.record(IntersectionSample::new(0.6, true)) {
                match self.counter.activate() {
                    Activation::Started => self.ticking = true,
                    Activation::AlreadyActive | Activation::Completed => {}
                }
            }
        }

        fn on_timer(&mut self) {
            if self.ticking {
                self.ticking = self.counter.tick().should_continue();
            }
        }

        fn display(&self) -> String {
            format_stat(self.counter.value(), self.suffix)
        }
    }

    #[test]
    fn test_stat_cards_read_exact_values_after_duration() {
        let config = MotionConfig::DEFAULT;
        let mut cards: Vec<StatCard> = STATS
            .iter()
            .map(|s| StatCard::new(s.value, s.suffix, &config))
            .collect();

        for card in &mut cards {
            assert_eq!(card.display(), format_stat(0, card.suffix));
            card.scroll_into_view();
        }

        let mut elapsed = 0;
        while elapsed + config.counter_tick_ms <= config.counter_duration_ms {
            for card in &mut cards {
                card.on_timer();
            }
            elapsed += config.counter_tick_ms;
        }

        let shown: Vec<String> = cards.iter().map(StatCard::display).collect();
        assert_eq!(shown, vec!["100,000+", "10,000+", "450,000+", "98%"]);
        assert!(cards.iter().all(|c| !c.ticking));
    }

    #[test]
    fn test_counter_never_starts_before_visibility() {
        let config = MotionConfig::DEFAULT;
        let mut card = StatCard::new(98, "%", &config);

        card.tracker.attach();
        card.tracker.record(IntersectionSample::hidden());
        for _ in 0..100 {
            card.on_timer();
        }

        assert_eq!(card.display(), "0%");
    }

    #[test]
    fn test_double_visibility_reports_do_not_double_speed() {
        let config = MotionConfig::DEFAULT;
        let mut once = StatCard::new(10_000, "+", &config);
        let mut twice = StatCard::new(10_000, "+", &config);

        once.scroll_into_view();
        twice.scroll_into_view();
        twice.scroll_into_view();

        for _ in 0..5 {
            once.on_timer();
            twice.on_timer();
            assert_eq!(once.display(), twice.display());
        }
    }

    #[test]
    fn test_unmount_mid_animation_stops_mutation() {
        let mut counter = CounterAnimation::with_target(450_000);
        counter.activate();
        for _ in 0..10 {
            counter.tick();
        }
        let frozen = counter.value();

        counter.cancel();
        assert_eq!(counter.tick(), Tick::Ignored);
        assert_eq!(counter.value(), frozen);
        assert!(frozen < 450_000);
    }

    #[test]
    fn test_feature_cards_cascade_in_order() {
        let config = MotionConfig::DEFAULT;
        let schedule = RevealSchedule::new(config.feature_stagger_ms);
        let delays = schedule.delays(FEATURES.len());

        assert_eq!(delays.len(), 6);
        for (i, &delay) in delays.iter().enumerate() {
            assert_eq!(delay, i as u32 * 80);
        }
        // Item 5 starts strictly after items 0..4
        assert!(delays[..5].iter().all(|&d| d < delays[5]));
    }

    #[test]
    fn test_hero_pills_wait_for_headline() {
        let config = MotionConfig::DEFAULT;
        let schedule = RevealSchedule::with_base(config.hero_pill_base_ms, config.pill_stagger_ms);
        let delays = schedule.delays(HERO_PILLS.len());

        assert_eq!(delays, vec![1200, 1300, 1400, 1500]);
    }

    #[test]
    fn test_empty_state_pills_follow_card_entrance() {
        let config = MotionConfig::DEFAULT;
        let schedule =
            RevealSchedule::with_base(config.empty_state_pill_base_ms, config.pill_stagger_ms);

        assert_eq!(schedule.delays(EMPTY_STATE_PILLS.len()), vec![800, 900, 1000, 1100]);
        assert!(config.empty_state_delay_ms < schedule.delay_ms(0));
    }

    #[test]
    fn test_missing_capability_still_shows_content() {
        let mut tracker = RevealTracker::new(0.1);
        tracker.fail_open();
        assert!(tracker.is_visible());

        let mut counter = CounterAnimation::with_target(0);
        assert_eq!(counter.activate(), Activation::Completed);
        assert_eq!(format_stat(counter.value(), "+"), "0+");
    }
}
