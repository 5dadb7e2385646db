//! Tower Stack - a hook-and-drop stacking arcade engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (hook motion, drop evaluation, scoring, game state)
//! - `settings`: Runtime configuration loaded from JSON

pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (60 Hz)
    pub const TICK_MS: f32 = 1000.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the scheduler will account for (ms)
    pub const MAX_FRAME_MS: f32 = 100.0;
    /// Undrained game events kept before the oldest are discarded
    pub const MAX_QUEUED_EVENTS: usize = 64;

    /// Playfield is measured in percent of its width
    pub const FIELD_CENTER: f32 = 50.0;
    /// Hook swing amplitude around the center
    pub const HOOK_AMPLITUDE: f32 = 45.0;
    pub const HOOK_MIN_X: f32 = FIELD_CENTER - HOOK_AMPLITUDE;
    pub const HOOK_MAX_X: f32 = FIELD_CENTER + HOOK_AMPLITUDE;
    /// Angular speed per unit of level speed (radians per ms)
    pub const HOOK_SPEED_SCALE: f32 = 0.002;
    /// Extra swing speed per placed block
    pub const HOOK_SPEEDUP_PER_BLOCK: f32 = 0.05;

    /// Offset at or below which a drop snaps as Perfect
    pub const PERFECT_TOLERANCE: f32 = 3.0;
    /// Narrowest block that can survive a trim
    pub const MIN_BLOCK_WIDTH: f32 = 5.0;
    /// How much wider the base platform is than the level's first block
    pub const PLATFORM_EXTRA_WIDTH: f32 = 20.0;

    /// Scoring
    pub const PERFECT_BASE_SCORE: u64 = 20;
    pub const PERFECT_COMBO_BONUS: u64 = 5;
    pub const GOOD_SCORE: u64 = 10;

    /// Star rating thresholds (perfect ratio)
    pub const THREE_STAR_RATIO: f32 = 0.6;
    pub const TWO_STAR_RATIO: f32 = 0.3;
}
