//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Hook position is a function of elapsed session time only
//! - Seeded RNG only (demo player)
//! - One drop evaluation per input instant
//! - No rendering or platform dependencies

pub mod autoplay;
pub mod drop;
pub mod hook;
pub mod level;
pub mod machine;
pub mod rating;
pub mod snapshot;
pub mod state;

pub use autoplay::AutoPlayer;
pub use drop::{DropOutcome, DropResult, Footing, Placement, evaluate};
pub use hook::{FixedStep, hook_position};
pub use level::{LevelConfig, PALETTES, Rgb, generate_levels};
pub use machine::{Command, GameStateMachine};
pub use rating::rate;
pub use snapshot::{Feedback, Snapshot};
pub use state::{Block, GameEvent, GamePhase, SessionState};
