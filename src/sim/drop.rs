//! Drop evaluation
//!
//! Resolves a single drop against whatever the block lands on. The evaluator
//! is pure: it returns what should happen and the caller applies it.

use serde::{Deserialize, Serialize};

use super::level::LevelConfig;
use super::state::Block;
use crate::consts::*;

/// What a dropped block landed on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Footing {
    pub center_x: f32,
    pub width: f32,
}

impl Footing {
    /// The base platform, wider than any block the level can produce
    pub fn platform(level: &LevelConfig) -> Self {
        Self {
            center_x: FIELD_CENTER,
            width: level.initial_width + PLATFORM_EXTRA_WIDTH,
        }
    }
}

impl From<&Block> for Footing {
    fn from(block: &Block) -> Self {
        Self {
            center_x: block.center_x,
            width: block.width,
        }
    }
}

/// Drop verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropOutcome {
    /// Aligned within tolerance; snapped, no width lost
    Perfect,
    /// Landed off-center; overhang trimmed away
    Good,
    /// Fell past the footing or trimmed too thin; ends the session
    Miss,
}

/// Geometry of a block that survived the drop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub width: f32,
    pub center_x: f32,
    pub perfect: bool,
}

/// Everything the caller needs to apply a drop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropResult {
    pub outcome: DropOutcome,
    /// `None` on Miss
    pub placement: Option<Placement>,
    pub score_delta: u64,
    pub new_combo: u32,
}

impl DropResult {
    fn miss() -> Self {
        Self {
            outcome: DropOutcome::Miss,
            placement: None,
            score_delta: 0,
            new_combo: 0,
        }
    }
}

/// Evaluate a drop of a `pending_width` block released at `hook_x` onto `below`.
///
/// Thresholds are checked in order: total miss (`offset > pending_width`),
/// perfect (`offset <= PERFECT_TOLERANCE`), then trim. The perfect bonus uses
/// the combo from before this drop, so a streak's first perfect earns no bonus.
pub fn evaluate(hook_x: f32, pending_width: f32, below: Footing, combo: u32) -> DropResult {
    let offset = (hook_x - below.center_x).abs();

    if offset > pending_width {
        return DropResult::miss();
    }

    if offset <= PERFECT_TOLERANCE {
        return DropResult {
            outcome: DropOutcome::Perfect,
            placement: Some(Placement {
                width: pending_width,
                center_x: below.center_x,
                perfect: true,
            }),
            score_delta: PERFECT_BASE_SCORE + PERFECT_COMBO_BONUS * combo as u64,
            new_combo: combo + 1,
        };
    }

    let trimmed = pending_width - offset;
    if trimmed < MIN_BLOCK_WIDTH {
        return DropResult::miss();
    }

    DropResult {
        outcome: DropOutcome::Good,
        placement: Some(Placement {
            width: trimmed,
            center_x: hook_x,
            perfect: false,
        }),
        score_delta: GOOD_SCORE,
        new_combo: 0,
    }
}
