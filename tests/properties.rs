//! Property tests for the simulation invariants

use std::time::{Duration, Instant};

use glam::Vec2;
use proptest::prelude::*;

use tilt_maze::Tuning;
use tilt_maze::level::{default_borders, generate};
use tilt_maze::sim::{Engine, GamePhase, LevelGeometry, Obstacle};

const FRAME: Duration = Duration::from_millis(16);

fn tilts() -> impl Strategy<Value = Vec<(f32, f32)>> {
    prop::collection::vec((-1.0e4f32..1.0e4, -1.0e4f32..1.0e4), 1..120)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn velocity_stays_within_cap(samples in tilts(), boost in any::<bool>()) {
        let pillar = Obstacle::new(100.0, -50.0, 40.0, 100.0);
        let geometry = LevelGeometry::new(default_borders(), [pillar], vec![Vec2::new(-400.0, 400.0)], Vec2::ZERO);
        let tuning = Tuning::default();
        let max_speed = if boost { tuning.boost_max_speed } else { tuning.base_max_speed };
        let mut engine = Engine::new(geometry, tuning);
        if boost {
            engine.activate_speed_boost();
        }

        let start = Instant::now();
        for (i, (ax, ay)) in samples.into_iter().enumerate() {
            engine.update_with_sensor_at(Vec2::new(ax, ay), start + FRAME * i as u32);
            let vel = engine.ball().vel;
            prop_assert!(vel.x.abs() <= max_speed + 1e-4);
            prop_assert!(vel.y.abs() <= max_speed + 1e-4);
        }
    }

    #[test]
    fn collection_is_monotonic(seed in 0u64..1000, samples in tilts()) {
        let level = generate(seed);
        let mut engine = Engine::new(level.geometry(default_borders()), Tuning::default());
        let mut was_collected = vec![false; engine.items().len()];

        let start = Instant::now();
        for (i, (ax, ay)) in samples.into_iter().enumerate() {
            engine.update_with_sensor_at(Vec2::new(ax, ay) * 1e-3, start + FRAME * i as u32);
            for (seen, item) in was_collected.iter_mut().zip(engine.items()) {
                prop_assert!(!*seen || item.collected());
                *seen = item.collected();
            }
            let all = engine.items().iter().all(|item| item.collected());
            prop_assert_eq!(engine.phase() == GamePhase::LevelComplete, all);
        }
    }
}
