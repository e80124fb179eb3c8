//! Tilt Maze headless driver
//!
//! Plays a level with a simple autopilot that tilts toward the nearest item,
//! then prints the result as JSON.
//!
//! Usage: `tilt-maze [LEVEL.json | SEED] [TUNING.json]`

use std::time::{Duration, Instant};

use anyhow::Context;
use glam::Vec2;

use tilt_maze::level::{self, LevelData};
use tilt_maze::sim::GameEvent;
use tilt_maze::{InputSettings, Session, Tuning};

/// Frames to run before giving up
const MAX_FRAMES: u32 = 60 * 600;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Tilt Maze (headless) starting...");

    let mut args = std::env::args().skip(1);
    let level = match args.next() {
        Some(arg) => match arg.parse::<u64>() {
            Ok(seed) => level::generate(seed),
            Err(_) => LevelData::load(&arg).with_context(|| format!("loading level {arg}"))?,
        },
        None => level::generate(1),
    };
    let tuning = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading tuning {path}"))?;
            Tuning::from_json(&json)?
        }
        None => Tuning::default(),
    };

    log::info!("Playing '{}'", level.name);
    let input = InputSettings::default();
    let mut session = Session::new(level, tuning);

    let frame = Duration::from_millis(16);
    let start = Instant::now();
    for i in 0..MAX_FRAMES {
        let tilt = input.apply(autopilot(&session));
        for event in session.frame(tilt, start + frame * i, 1.0 / 60.0) {
            match event {
                GameEvent::Ticked => {}
                other => log::info!("frame {i}: {other:?}"),
            }
        }
        if let Some(result) = session.result() {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }
    }

    log::warn!("Gave up after {MAX_FRAMES} frames");
    println!(
        "{}",
        serde_json::to_string_pretty(&session.engine().snapshot())?
    );
    Ok(())
}

/// Tilt toward the nearest uncollected item
fn autopilot(session: &Session) -> Vec2 {
    let engine = session.engine();
    let ball = engine.ball_position();
    engine
        .items()
        .iter()
        .filter(|item| !item.collected())
        .map(|item| item.pos - ball)
        .min_by(|a, b| a.length_squared().total_cmp(&b.length_squared()))
        .map(|to_item| to_item.normalize_or_zero() * 2.0)
        .unwrap_or(Vec2::ZERO)
}
