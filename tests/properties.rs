use brick_breaker::GameConfig;
use brick_breaker::sim::{GameEvent, GamePhase, Intent, Paddle, SessionState, TickInput, tick};
use proptest::prelude::*;

fn intent_strategy() -> impl Strategy<Value = Intent> {
    prop_oneof![Just(Intent::Left), Just(Intent::Right), Just(Intent::None)]
}

fn input_strategy() -> impl Strategy<Value = TickInput> {
    (intent_strategy(), proptest::option::of(-100.0f32..600.0))
        .prop_map(|(intent, pointer_x)| TickInput { intent, pointer_x })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn session_invariants_hold(
        inputs in prop::collection::vec(input_strategy(), 1..300),
        hold in 1usize..10,
    ) {
        let mut state = SessionState::new(GameConfig::default());
        let start_speed = state.ball.vel.abs();
        let total = state.total_bricks();
        let mut lost_events = 0;

        'run: for input in &inputs {
            for _ in 0..hold {
                let score_before = state.score;
                let lives_before = state.lives;

                let events = tick(&mut state, input);

                // Reflections flip signs only
                prop_assert_eq!(state.ball.vel.abs(), start_speed);

                // Paddle stays inside the arena
                prop_assert!(state.paddle.x >= 0.0 && state.paddle.x <= state.paddle.max_x);

                // Score is monotone and counts destroyed bricks exactly
                let destroyed = events
                    .iter()
                    .filter(|e| matches!(e, GameEvent::BrickDestroyed { .. }))
                    .count() as u32;
                prop_assert_eq!(state.score, score_before + destroyed);
                prop_assert_eq!(state.score as usize, state.bricks.destroyed_count());
                prop_assert_eq!(state.score == total, state.bricks.all_destroyed());

                // Alive bricks never pass the last tier
                prop_assert!(state
                    .bricks
                    .bricks
                    .iter()
                    .all(|b| b.tier <= state.bricks.last_tier));

                // One life per miss
                let misses = events
                    .iter()
                    .filter(|e| matches!(e, GameEvent::LifeLost { .. }))
                    .count() as u32;
                prop_assert!(misses <= 1);
                prop_assert_eq!(state.lives, lives_before - misses);

                lost_events += events.iter().filter(|e| **e == GameEvent::Lost).count();
                prop_assert_eq!(state.phase, state.derived_phase());

                if state.phase.is_terminal() {
                    break 'run;
                }
            }
        }

        prop_assert!(lost_events <= 1);
        prop_assert_eq!(lost_events == 1, state.phase == GamePhase::Lost);
        prop_assert_eq!(state.phase == GamePhase::Lost, state.lives == 0);
    }

    #[test]
    fn paddle_always_in_bounds(
        moves in prop::collection::vec(
            (intent_strategy(), proptest::option::of(-1000.0f32..1000.0)),
            1..500,
        ),
    ) {
        let mut paddle = Paddle::new(&GameConfig::default());
        for (intent, pointer) in moves {
            if let Some(x) = pointer {
                paddle.set_absolute(x);
            }
            paddle.set_intent(intent);
            paddle.tick();
            prop_assert!(paddle.x >= 0.0);
            prop_assert!(paddle.x <= paddle.max_x);
        }
    }
}
