//! Top-level game state machine
//!
//! Owns the level table, the active session and the elapsed-time origin.
//! External input arrives as [`Command`]s; only `TriggerDrop` ever touches
//! score or stack.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::drop::{DropOutcome, DropResult, evaluate};
use super::hook::hook_position;
use super::level::{LevelConfig, generate_levels};
use super::rating::rate;
use super::snapshot::{Feedback, Snapshot};
use super::state::{GameEvent, GamePhase, SessionState};
use crate::consts::MAX_QUEUED_EVENTS;
use crate::settings::Settings;

/// Discrete input from the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Start,
    TriggerDrop,
    RetryLevel,
    AdvanceLevel,
    ReturnToMenu,
}

/// The game
#[derive(Debug, Clone)]
pub struct GameStateMachine {
    levels: Vec<LevelConfig>,
    phase: GamePhase,
    session: SessionState,
    /// Time since the current session started (ms)
    elapsed_ms: f64,
    /// Last sampled hook position
    hook_x: f32,
    /// Set once a drop is accepted; released by the next tick or reset
    evaluation_in_progress: bool,
    feedback: Feedback,
    stars: Option<u8>,
    /// Oldest events are dropped once the queue is full
    events: VecDeque<GameEvent>,
}

impl GameStateMachine {
    /// Machine sitting at the menu. An empty table falls back to one level.
    pub fn new(levels: Vec<LevelConfig>) -> Self {
        let levels = if levels.is_empty() {
            generate_levels(1)
        } else {
            levels
        };
        let session = SessionState::new(0, &levels[0]);
        Self {
            levels,
            phase: GamePhase::Menu,
            session,
            elapsed_ms: 0.0,
            hook_x: crate::consts::FIELD_CENTER,
            evaluation_in_progress: false,
            feedback: Feedback::None,
            stars: None,
            events: VecDeque::with_capacity(MAX_QUEUED_EVENTS),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(generate_levels(settings.level_count.max(1)))
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn levels(&self) -> &[LevelConfig] {
        &self.levels
    }

    /// Config of the level being played
    pub fn level(&self) -> &LevelConfig {
        &self.levels[self.session.level_index]
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn hook_x(&self) -> f32 {
        self.hook_x
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// Star rating, set on entering LevelComplete or GameOver
    pub fn stars(&self) -> Option<u8> {
        self.stars
    }

    pub fn evaluation_in_progress(&self) -> bool {
        self.evaluation_in_progress
    }

    /// Take queued events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    /// Events waiting to be drained
    pub fn queued_events(&self) -> usize {
        self.events.len()
    }

    fn push_event(&mut self, event: GameEvent) {
        if self.events.len() == MAX_QUEUED_EVENTS {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Dispatch a command. Returns false when it was not legal in the current phase.
    pub fn apply(&mut self, command: Command) -> bool {
        let handled = match command {
            Command::Start => self.start(),
            Command::TriggerDrop => self.trigger_drop(),
            Command::RetryLevel => self.retry(),
            Command::AdvanceLevel => self.advance(),
            Command::ReturnToMenu => self.return_to_menu(),
        };
        if !handled {
            log::debug!("Ignored {:?} in {:?}", command, self.phase);
        }
        handled
    }

    /// Menu -> Playing on the first level
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Menu {
            return false;
        }
        self.begin_session(0);
        true
    }

    /// LevelComplete | GameOver -> Playing on the same level
    pub fn retry(&mut self) -> bool {
        if !self.phase.is_terminal() {
            return false;
        }
        self.begin_session(self.session.level_index);
        true
    }

    /// LevelComplete -> Playing on the next level, wrapping after the last
    pub fn advance(&mut self) -> bool {
        if self.phase != GamePhase::LevelComplete {
            return false;
        }
        let next = (self.session.level_index + 1) % self.levels.len();
        if next == 0 {
            log::info!("Last level cleared, wrapping to level 1");
        }
        self.begin_session(next);
        true
    }

    /// Anything but Menu -> Menu. The session is discarded.
    pub fn return_to_menu(&mut self) -> bool {
        if self.phase == GamePhase::Menu {
            return false;
        }
        log::info!(
            "Returning to menu (level {}, score {})",
            self.level().level_number,
            self.session.score
        );
        self.session = SessionState::new(0, &self.levels[0]);
        self.phase = GamePhase::Menu;
        self.elapsed_ms = 0.0;
        self.hook_x = crate::consts::FIELD_CENTER;
        self.evaluation_in_progress = false;
        self.feedback = Feedback::None;
        self.stars = None;
        self.push_event(GameEvent::ReturnedToMenu);
        true
    }

    /// Advance session time by one tick and resample the hook.
    ///
    /// Time only runs while Playing; elsewhere the hook stays where it was.
    pub fn tick(&mut self, dt_ms: f32) {
        self.evaluation_in_progress = false;
        if self.phase != GamePhase::Playing {
            return;
        }
        self.elapsed_ms += f64::from(dt_ms.max(0.0));
        self.hook_x = self.sample_hook();
    }

    /// Drop the block at the hook's current position.
    ///
    /// A no-op outside Playing, and for any repeat trigger before the next tick.
    pub fn trigger_drop(&mut self) -> bool {
        if self.phase != GamePhase::Playing || self.evaluation_in_progress {
            return false;
        }
        self.evaluation_in_progress = true;
        let hook_x = self.sample_hook();
        self.resolve_drop(hook_x);
        true
    }

    /// Renderer view of the current state
    pub fn snapshot(&self) -> Snapshot {
        let level = self.level();
        Snapshot {
            phase: self.phase,
            level_index: self.session.level_index,
            level_number: level.level_number,
            target_blocks: level.target_blocks,
            score: self.session.score,
            combo: self.session.combo,
            stack: self.session.stack.clone(),
            pending_width: self.session.pending_width,
            hook_x: self.hook_x,
            feedback: self.feedback,
            stars: self.stars,
            elapsed_ms: self.elapsed_ms,
        }
    }

    fn sample_hook(&self) -> f32 {
        hook_position(self.elapsed_ms, self.level(), self.session.blocks_placed())
    }

    /// Switch to `level_index` and reset the session against that level's
    /// config in one step, so nothing can observe the old config in between.
    fn begin_session(&mut self, level_index: usize) {
        let level_index = level_index.min(self.levels.len() - 1);
        self.session = SessionState::new(level_index, &self.levels[level_index]);
        self.phase = GamePhase::Playing;
        self.elapsed_ms = 0.0;
        self.evaluation_in_progress = false;
        self.feedback = Feedback::None;
        self.stars = None;
        self.hook_x = self.sample_hook();

        let level = self.level();
        let palette: Vec<String> = level.color_palette.iter().map(|c| c.to_hex()).collect();
        log::info!(
            "Level {} started: target={}, width={}, speed={}, palette=[{}]",
            level.level_number,
            level.target_blocks,
            level.initial_width,
            level.base_speed,
            palette.join(", ")
        );
        self.push_event(GameEvent::SessionStarted { level_index });
    }

    /// Evaluate a drop at `hook_x` and apply it
    pub(crate) fn resolve_drop(&mut self, hook_x: f32) -> DropResult {
        let level_index = self.session.level_index;
        let level = &self.levels[level_index];
        let footing = self.session.footing(level);
        let result = evaluate(hook_x, self.session.pending_width, footing, self.session.combo);

        log::debug!(
            "Drop at {:.2} onto {:.2} (w={:.2}): {:?} +{}",
            hook_x,
            footing.center_x,
            self.session.pending_width,
            result.outcome,
            result.score_delta
        );
        self.push_event(GameEvent::DropResolved {
            outcome: result.outcome,
            score_delta: result.score_delta,
        });

        if result.outcome == DropOutcome::Miss {
            self.session.combo = 0;
            self.feedback = Feedback::None;
            self.enter_terminal(GamePhase::GameOver);
            return result;
        }

        self.session.apply(&result, &self.levels[level_index]);
        self.feedback = Feedback::from(result.outcome);
        self.hook_x = self.sample_hook();

        if self.session.blocks_placed() >= self.levels[level_index].target_blocks {
            self.enter_terminal(GamePhase::LevelComplete);
        }
        result
    }

    fn enter_terminal(&mut self, phase: GamePhase) {
        self.phase = phase;
        let stars = rate(phase, &self.session.stack);
        self.stars = Some(stars);

        match phase {
            GamePhase::LevelComplete => {
                log::info!(
                    "Level {} complete: score={}, perfect={}/{}, stars={}",
                    self.level().level_number,
                    self.session.score,
                    self.session.perfect_count,
                    self.session.stack.len(),
                    stars
                );
                self.push_event(GameEvent::LevelCompleted { stars });
            }
            _ => {
                log::info!(
                    "Game over on level {}: score={}, height={}",
                    self.level().level_number,
                    self.session.score,
                    self.session.stack.len()
                );
                self.push_event(GameEvent::GameOver {
                    score: self.session.score,
                });
            }
        }
    }
}

impl Default for GameStateMachine {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}
