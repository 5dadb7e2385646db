//! Tower Stack entry point
//!
//! Headless runner: a demo player plays a few sessions and every state
//! transition is printed as a JSON snapshot, one per line.

use tower_stack::Settings;
use tower_stack::sim::{AutoPlayer, Command, FixedStep, GameEvent, GamePhase, GameStateMachine};

/// Give up on a session that never ends (ten simulated minutes at 60 Hz)
const MAX_TICKS_PER_SESSION: u32 = 60 * 60 * 10;

/// Virtual frame time fed to the scheduler (ms)
const FRAME_MS: f32 = 1000.0 / 60.0;

fn main() {
    env_logger::init();
    log::info!("Tower Stack (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from(path),
        None => Settings::default(),
    };

    match settings.to_json() {
        Ok(json) => log::debug!("Settings: {}", json),
        Err(e) => log::warn!("Could not encode settings: {}", e),
    }

    let mut game = GameStateMachine::from_settings(&settings);
    let mut player = AutoPlayer::new(settings.demo_seed, settings.demo_skill);
    let mut scheduler = FixedStep::from_hz(settings.tick_hz);
    log::info!(
        "{} levels, {} Hz, demo seed {}",
        game.levels().len(),
        settings.tick_hz,
        player.seed()
    );

    game.apply(Command::Start);
    print_snapshot(&game);

    for round in 1..=settings.demo_rounds {
        let mut ticks = 0;
        while game.phase() == GamePhase::Playing && ticks < MAX_TICKS_PER_SESSION {
            for _ in 0..scheduler.advance(FRAME_MS) {
                game.tick(scheduler.step_ms());
                ticks += 1;
                if player.wants_drop(&game) {
                    game.apply(Command::TriggerDrop);
                }
                if game.phase() != GamePhase::Playing {
                    break;
                }
            }
        }

        for event in game.drain_events() {
            log::debug!("{:?}", event);
            if matches!(event, GameEvent::LevelCompleted { .. } | GameEvent::GameOver { .. }) {
                print_snapshot(&game);
            }
        }

        if game.phase() == GamePhase::Playing {
            log::warn!("Round {} did not finish after {} ticks", round, ticks);
            game.apply(Command::ReturnToMenu);
            game.apply(Command::Start);
        } else if round < settings.demo_rounds {
            let next = match game.phase() {
                GamePhase::LevelComplete => Command::AdvanceLevel,
                _ => Command::RetryLevel,
            };
            game.apply(next);
            scheduler.reset();
            print_snapshot(&game);
        }
    }

    game.apply(Command::ReturnToMenu);
    log::info!("Done");
}

fn print_snapshot(game: &GameStateMachine) {
    match game.snapshot().to_json() {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Snapshot encoding failed: {}", e),
    }
}
