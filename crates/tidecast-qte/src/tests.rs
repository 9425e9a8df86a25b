#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use tidecast_core::config::EncounterConfig;
    use tidecast_core::enums::{InputModality, QteOutcome, Rarity, SizeTier};
    use tidecast_core::events::GameEvent;
    use tidecast_core::fish::FishDescriptor;
    use tidecast_core::types::{Challenge, ScreenPoint, Timestamp};

    use crate::challenge::{ChallengeStrategy, KeyPressStrategy, TapTargetStrategy};
    use crate::controller::QteController;

    fn make_fish(required: u32, time: f64) -> FishDescriptor {
        FishDescriptor {
            fish_type: "Sunny Bass".to_string(),
            rarity: Rarity::Common,
            size: SizeTier::Small,
            value: 9,
            qte_time: time,
            qte_required: required,
            color: "#ffd700".to_string(),
            rarity_color: "#95a5a6".to_string(),
            is_event_fish: false,
        }
    }

    fn t(ms: f64) -> Timestamp {
        Timestamp::from_millis(ms)
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(5)
    }

    /// Answer whatever is on screen.
    fn answer(qte: &mut QteController, now: Timestamp) -> bool {
        match qte.view().and_then(|v| v.challenge) {
            Some(Challenge::KeyPress { key }) => qte.on_key_press(key.to_ascii_lowercase(), now),
            Some(Challenge::TapTarget { x, y }) => qte.on_tap(ScreenPoint::new(x, y), now),
            None => false,
        }
    }

    #[test]
    fn test_start_attaches_one_listener() {
        let mut rng = rng();
        let mut qte = QteController::new(InputModality::Desktop, &EncounterConfig::default());
        assert!(qte.start(&make_fish(3, 1.5), t(0.0), &mut rng));
        assert!(qte.is_active());
        assert!(qte.registry().is_live(InputModality::Desktop));
        assert_eq!(qte.registry().live_count(), 1);

        // A second start for the same bite is ignored.
        assert!(!qte.start(&make_fish(3, 1.5), t(10.0), &mut rng));
        assert_eq!(qte.registry().attached_total(), 1);

        let view = qte.view().unwrap();
        assert_eq!(view.success_count, 0);
        assert_eq!(view.required, 3);
        assert_eq!(view.time_remaining, 1.5);
        assert!(matches!(view.challenge, Some(Challenge::KeyPress { .. })));
    }

    #[test]
    fn test_non_matching_input_is_ignored() {
        let mut rng = rng();
        let mut qte = QteController::new(InputModality::Desktop, &EncounterConfig::default());
        qte.start(&make_fish(3, 1.5), t(0.0), &mut rng);
        let Some(Challenge::KeyPress { key }) = qte.view().unwrap().challenge else {
            panic!("desktop QTE should present a key");
        };
        let wrong = if key == 'Z' { 'X' } else { 'Z' };
        assert!(!qte.on_key_press(wrong, t(50.0)));
        assert!(!qte.on_key_press(' ', t(50.0)));
        assert!(!qte.on_tap(ScreenPoint::new(50.0, 50.0), t(50.0)));
        let view = qte.view().unwrap();
        assert_eq!(view.success_count, 0);
        assert_eq!(view.time_remaining, 1.5);
    }

    #[test]
    fn test_reprompt_after_delay() {
        let mut rng = rng();
        let mut qte = QteController::new(InputModality::Desktop, &EncounterConfig::default());
        qte.start(&make_fish(3, 1.5), t(0.0), &mut rng);
        assert_eq!(qte.advance(t(250.0), &mut rng), None);
        assert!((qte.view().unwrap().time_remaining - 1.3).abs() < 1e-9);

        assert!(answer(&mut qte, t(260.0)));
        let view = qte.view().unwrap();
        assert_eq!(view.success_count, 1);
        assert!(view.challenge.is_none());
        // Timer refilled on success.
        assert_eq!(view.time_remaining, 1.5);

        // Nothing to answer during the pause.
        for key in ['A', 'S', 'D', 'W', 'E', 'Q', 'R', 'F'] {
            assert!(!qte.on_key_press(key, t(300.0)));
        }
        qte.advance(t(440.0), &mut rng);
        assert!(qte.view().unwrap().challenge.is_none());
        qte.advance(t(460.0), &mut rng);
        assert!(qte.view().unwrap().challenge.is_some());
    }

    #[test]
    fn test_success_detaches_before_reporting() {
        let mut rng = rng();
        let mut qte = QteController::new(InputModality::Desktop, &EncounterConfig::default());
        qte.start(&make_fish(3, 1.5), t(0.0), &mut rng);

        let mut now = 0.0;
        let mut outcome = None;
        while outcome.is_none() && now < 5000.0 {
            now += 16.67;
            answer(&mut qte, t(now));
            outcome = qte.advance(t(now), &mut rng);
        }
        assert_eq!(outcome, Some(QteOutcome::Success));
        assert!(!qte.is_active());
        assert!(qte.view().is_none());
        assert_eq!(qte.registry().live_count(), 0);
        assert_eq!(qte.registry().detached_total(), 1);

        let events = qte.drain_events();
        let detached = events
            .iter()
            .position(|e| matches!(e, GameEvent::ListenerDetached { .. }))
            .unwrap();
        let succeeded = events
            .iter()
            .position(|e| matches!(e, GameEvent::QteSucceeded))
            .unwrap();
        assert!(detached < succeeded);
        assert!(!events.iter().any(|e| matches!(e, GameEvent::QteFailed { .. })));
        let progress = events
            .iter()
            .filter(|e| matches!(e, GameEvent::QteProgress { .. }))
            .count();
        assert_eq!(progress, 3);
    }

    #[test]
    fn test_timeout_fails_after_max_time() {
        let mut rng = rng();
        let mut qte = QteController::new(InputModality::Desktop, &EncounterConfig::default());
        qte.start(&make_fish(3, 1.5), t(0.0), &mut rng);
        assert!(answer(&mut qte, t(10.0)));

        // Refilled at t=10; 15 countdown steps later it runs out.
        assert_eq!(qte.advance(t(1409.0), &mut rng), None);
        assert_eq!(qte.advance(t(1510.0), &mut rng), Some(QteOutcome::Failure));
        assert_eq!(qte.registry().live_count(), 0);

        let events = qte.drain_events();
        assert!(events.contains(&GameEvent::QteFailed {
            success_count: 1,
            required: 3,
        }));
        let detached = events
            .iter()
            .position(|e| matches!(e, GameEvent::ListenerDetached { .. }))
            .unwrap();
        let failed = events
            .iter()
            .position(|e| matches!(e, GameEvent::QteFailed { .. }))
            .unwrap();
        assert!(detached < failed);

        // Input after resolution goes nowhere.
        assert!(!qte.on_key_press('A', t(1600.0)));
        assert_eq!(qte.advance(t(1700.0), &mut rng), None);
    }

    #[test]
    fn test_countdown_catches_up_in_one_advance() {
        let mut rng = rng();
        let mut qte = QteController::new(InputModality::Desktop, &EncounterConfig::default());
        qte.start(&make_fish(3, 1.0), t(0.0), &mut rng);
        assert_eq!(qte.advance(t(999.0), &mut rng), None);
        assert!((qte.view().unwrap().time_remaining - 0.1).abs() < 1e-9);
        assert_eq!(qte.advance(t(1000.0), &mut rng), Some(QteOutcome::Failure));
    }

    /// Clearing the last challenge wins even if the timer ran out in the same advance.
    #[test]
    fn test_success_takes_precedence() {
        let mut rng = rng();
        let mut qte = QteController::new(InputModality::Desktop, &EncounterConfig::default());
        qte.start(&make_fish(1, 0.9), t(0.0), &mut rng);
        assert!(answer(&mut qte, t(0.0)));
        assert_eq!(qte.advance(t(5000.0), &mut rng), Some(QteOutcome::Success));
    }

    #[test]
    fn test_close_detaches_exactly_once() {
        let mut rng = rng();
        let mut qte = QteController::new(InputModality::Touch, &EncounterConfig::default());
        qte.start(&make_fish(3, 1.5), t(0.0), &mut rng);
        assert!(qte.registry().is_live(InputModality::Touch));
        assert!(qte.close());
        assert!(!qte.close());
        assert_eq!(qte.registry().attached_total(), 1);
        assert_eq!(qte.registry().detached_total(), 1);
        assert_eq!(qte.advance(t(5000.0), &mut rng), None);

        let events = qte.drain_events();
        let detaches = events
            .iter()
            .filter(|e| matches!(e, GameEvent::ListenerDetached { .. }))
            .count();
        assert_eq!(detaches, 1);
        assert!(!events
            .iter()
            .any(|e| matches!(e, GameEvent::QteSucceeded | GameEvent::QteFailed { .. })));

        // A fresh activation can register again.
        assert!(qte.start(&make_fish(3, 1.5), t(6000.0), &mut rng));
        assert_eq!(qte.registry().attached_total(), 2);
    }

    #[test]
    fn test_tap_target_bounds() {
        let mut rng = rng();
        let mut qte = QteController::new(InputModality::Touch, &EncounterConfig::default());
        qte.start(&make_fish(3, 1.5), t(0.0), &mut rng);
        let Some(Challenge::TapTarget { x, y }) = qte.view().unwrap().challenge else {
            panic!("touch QTE should present a tap target");
        };
        assert!(!qte.on_tap(ScreenPoint::new(x + 9.0, y), t(10.0)));
        assert!(!qte.on_key_press('A', t(10.0)));
        assert!(qte.on_tap(ScreenPoint::new(x + 7.5, y - 7.5), t(10.0)));
        assert_eq!(qte.view().unwrap().success_count, 1);
    }

    #[test]
    fn test_key_strategy_samples_pool() {
        let mut rng = rng();
        let mut strategy = KeyPressStrategy::new(&['a', 's'], false);
        assert_eq!(strategy.modality(), InputModality::Desktop);
        for _ in 0..50 {
            match strategy.next(&mut rng, None) {
                Challenge::KeyPress { key } => assert!(key == 'A' || key == 'S'),
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn test_duplicates_allowed_by_default() {
        let mut rng = rng();
        let mut strategy = TapTargetStrategy::new(&[(50.0, 50.0)], false);
        let first = strategy.next(&mut rng, None);
        assert_eq!(strategy.next(&mut rng, Some(&first)), first);
    }

    #[test]
    fn test_avoid_repeats_rerolls() {
        let mut rng = rng();
        let config = EncounterConfig::default();
        let mut keys = KeyPressStrategy::new(&config.keys, true);
        let mut taps = TapTargetStrategy::new(&config.tap_positions, true);
        let mut last_key = keys.next(&mut rng, None);
        let mut last_tap = taps.next(&mut rng, None);
        for _ in 0..200 {
            let key = keys.next(&mut rng, Some(&last_key));
            assert_ne!(key, last_key);
            last_key = key;
            let tap = taps.next(&mut rng, Some(&last_tap));
            assert_ne!(tap, last_tap);
            last_tap = tap;
        }

        // A single-entry pool still yields its only challenge.
        let mut single = KeyPressStrategy::new(&['E'], true);
        let e = single.next(&mut rng, None);
        assert_eq!(single.next(&mut rng, Some(&e)), e);
    }
}
