//! Demo player
//!
//! Watches the hook and triggers drops on its own. Seeded, so a given seed
//! and skill always play the same game.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::machine::GameStateMachine;
use super::state::GamePhase;
use crate::consts::PERFECT_TOLERANCE;

/// Ticks to wait before loosening the aim (one second at 60 Hz)
const PATIENCE_TICKS: u32 = 60;
/// How much the aim loosens each time patience runs out
const PATIENCE_STEP: f32 = 1.0;
/// Tightest aim the player will attempt
const MIN_AIM: f32 = 1.0;

#[derive(Debug, Clone)]
pub struct AutoPlayer {
    seed: u64,
    rng: Pcg32,
    /// Chance (0-1) of aiming for a perfect drop
    skill: f32,
    /// Largest hook offset the current attempt will accept
    aim: f32,
    waited_ticks: u32,
}

impl AutoPlayer {
    pub fn new(seed: u64, skill: f32) -> Self {
        let mut player = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            skill: skill.clamp(0.0, 1.0),
            aim: PERFECT_TOLERANCE,
            waited_ticks: 0,
        };
        player.aim = player.roll_aim(PERFECT_TOLERANCE * 4.0);
        player
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Look at the game and decide whether to drop this tick
    pub fn wants_drop(&mut self, game: &GameStateMachine) -> bool {
        if game.phase() != GamePhase::Playing {
            self.waited_ticks = 0;
            return false;
        }

        let session = game.session();
        let footing = session.footing(game.level());
        let offset = (game.hook_x() - footing.center_x).abs();

        if offset <= self.aim {
            self.waited_ticks = 0;
            self.aim = self.roll_aim(session.pending_width);
            return true;
        }

        self.waited_ticks += 1;
        if self.waited_ticks >= PATIENCE_TICKS {
            self.waited_ticks = 0;
            self.aim += PATIENCE_STEP;
        }
        false
    }

    /// Pick the next aim: inside the perfect window with probability `skill`,
    /// otherwise somewhere in the trimming range.
    fn roll_aim(&mut self, pending_width: f32) -> f32 {
        if self.rng.random::<f32>() < self.skill {
            return self.rng.random_range(MIN_AIM..=PERFECT_TOLERANCE);
        }
        let sloppy = (pending_width * 0.5).max(PERFECT_TOLERANCE + MIN_AIM);
        self.rng.random_range(PERFECT_TOLERANCE..=sloppy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TICK_MS;
    use crate::sim::level::generate_levels;
    use crate::sim::machine::Command;

    fn play(seed: u64, skill: f32, max_ticks: u32) -> GameStateMachine {
        let mut game = GameStateMachine::new(generate_levels(3));
        let mut player = AutoPlayer::new(seed, skill);
        game.apply(Command::Start);
        for _ in 0..max_ticks {
            game.tick(TICK_MS);
            if player.wants_drop(&game) {
                game.apply(Command::TriggerDrop);
            }
            if game.phase() != GamePhase::Playing {
                break;
            }
        }
        game
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = play(42, 0.7, 20_000);
        let b = play(42, 0.7, 20_000);
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_perfect_skill_aims_inside_window() {
        let mut player = AutoPlayer::new(7, 1.0);
        for _ in 0..100 {
            let aim = player.roll_aim(40.0);
            assert!((MIN_AIM..=PERFECT_TOLERANCE).contains(&aim));
        }
    }

    #[test]
    fn test_zero_skill_aims_outside_window() {
        let mut player = AutoPlayer::new(7, 0.0);
        for _ in 0..100 {
            let aim = player.roll_aim(40.0);
            assert!((PERFECT_TOLERANCE..=20.0).contains(&aim));
        }
    }

    #[test]
    fn test_skilled_player_finishes_session() {
        let game = play(1, 1.0, 100_000);
        assert!(game.phase().is_terminal());
        assert!(!game.session().stack.is_empty());
    }

    #[test]
    fn test_idle_outside_playing() {
        let game = GameStateMachine::new(generate_levels(1));
        let mut player = AutoPlayer::new(3, 1.0);
        assert!(!player.wants_drop(&game));
    }
}
