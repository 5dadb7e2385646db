//! Game state and core simulation types

use serde::{Deserialize, Serialize};

use super::drop::{DropOutcome, DropResult, Footing};
use super::level::{LevelConfig, Rgb};

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, no session
    #[default]
    Menu,
    /// Hook swinging, drops accepted
    Playing,
    /// Target height reached
    LevelComplete,
    /// A drop missed
    GameOver,
}

impl GamePhase {
    /// Whether the session has ended (rating available)
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::LevelComplete | GamePhase::GameOver)
    }
}

/// Notable things that happened, for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    SessionStarted { level_index: usize },
    DropResolved { outcome: DropOutcome, score_delta: u64 },
    LevelCompleted { stars: u8 },
    GameOver { score: u64 },
    ReturnedToMenu,
}

/// A placed block. Never changes once on the stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: u32,
    pub width: f32,
    pub center_x: f32,
    /// Height in the stack, 0 = resting on the platform
    pub vertical_index: usize,
    pub color: Rgb,
    pub is_perfect: bool,
}

/// One attempt at one level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// Placed blocks, bottom first
    pub stack: Vec<Block>,
    /// Width of the next block to drop
    pub pending_width: f32,
    pub score: u64,
    /// Consecutive perfect drops
    pub combo: u32,
    /// Longest perfect streak this session
    pub best_combo: u32,
    /// Perfect drops this session
    pub perfect_count: usize,
    /// Index into the level table
    pub level_index: usize,
    /// Next block ID
    next_id: u32,
}

impl SessionState {
    /// Fresh session for a level
    pub fn new(level_index: usize, level: &LevelConfig) -> Self {
        Self {
            stack: Vec::with_capacity(level.target_blocks),
            pending_width: level.initial_width,
            score: 0,
            combo: 0,
            best_combo: 0,
            perfect_count: 0,
            level_index,
            next_id: 1,
        }
    }

    /// What the next drop lands on
    pub fn footing(&self, level: &LevelConfig) -> Footing {
        match self.stack.last() {
            Some(top) => Footing::from(top),
            None => Footing::platform(level),
        }
    }

    pub fn blocks_placed(&self) -> usize {
        self.stack.len()
    }

    /// Apply a resolved drop. Returns the placed block, or `None` on Miss.
    pub fn apply(&mut self, result: &DropResult, level: &LevelConfig) -> Option<&Block> {
        let placement = result.placement?;

        let vertical_index = self.stack.len();
        let id = self.next_id;
        self.next_id += 1;

        self.stack.push(Block {
            id,
            width: placement.width,
            center_x: placement.center_x,
            vertical_index,
            color: level.color_for(vertical_index),
            is_perfect: placement.perfect,
        });

        self.pending_width = placement.width;
        self.score += result.score_delta;
        self.combo = result.new_combo;
        self.best_combo = self.best_combo.max(self.combo);
        if placement.perfect {
            self.perfect_count += 1;
        }

        self.stack.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::drop::evaluate;

    #[test]
    fn test_new_session_is_empty() {
        let level = LevelConfig::for_level(1);
        let session = SessionState::new(0, &level);
        assert!(session.stack.is_empty());
        assert_eq!(session.score, 0);
        assert_eq!(session.combo, 0);
        assert!((session.pending_width - 48.0).abs() < 0.001);
        assert_eq!(session.footing(&level), Footing::platform(&level));
    }

    #[test]
    fn test_apply_appends_in_order() {
        let level = LevelConfig::for_level(1);
        let mut session = SessionState::new(0, &level);

        let first = evaluate(50.0, session.pending_width, session.footing(&level), session.combo);
        session.apply(&first, &level);
        let second = evaluate(60.0, session.pending_width, session.footing(&level), session.combo);
        session.apply(&second, &level);

        assert_eq!(session.stack.len(), 2);
        assert_eq!(session.stack[0].vertical_index, 0);
        assert_eq!(session.stack[1].vertical_index, 1);
        assert_ne!(session.stack[0].id, session.stack[1].id);
        assert_eq!(session.stack[1].color, level.color_palette[1]);
        assert!((session.pending_width - 38.0).abs() < 0.001);
        assert_eq!(session.score, 30);
        assert_eq!(session.combo, 0);
        assert_eq!(session.best_combo, 1);
        assert_eq!(session.perfect_count, 1);
    }

    #[test]
    fn test_apply_miss_changes_nothing() {
        let level = LevelConfig::for_level(1);
        let mut session = SessionState::new(0, &level);
        let miss = evaluate(5.0, 10.0, session.footing(&level), 0);
        assert_eq!(miss.outcome, DropOutcome::Miss);
        assert!(session.apply(&miss, &level).is_none());
        assert!(session.stack.is_empty());
        assert_eq!(session.score, 0);
    }

    #[test]
    fn test_footing_follows_top_block() {
        let level = LevelConfig::for_level(1);
        let mut session = SessionState::new(0, &level);
        let result = evaluate(60.0, session.pending_width, session.footing(&level), 0);
        session.apply(&result, &level);
        let footing = session.footing(&level);
        assert!((footing.center_x - 60.0).abs() < 0.001);
        assert!((footing.width - 38.0).abs() < 0.001);
    }

    #[test]
    fn test_event_json_names_variant() {
        let event = GameEvent::DropResolved {
            outcome: DropOutcome::Good,
            score_delta: 10,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"DropResolved":{"outcome":"Good","score_delta":10}}"#);
    }

    #[test]
    fn test_terminal_phases() {
        assert!(!GamePhase::Menu.is_terminal());
        assert!(!GamePhase::Playing.is_terminal());
        assert!(GamePhase::LevelComplete.is_terminal());
        assert!(GamePhase::GameOver.is_terminal());
    }
}
