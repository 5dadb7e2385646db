//! End-of-session star rating

use super::state::{Block, GamePhase};
use crate::consts::{THREE_STAR_RATIO, TWO_STAR_RATIO};

/// Stars (0-3) for a finished session.
///
/// A lost session scores nothing. A cleared level scores by the share of
/// perfect drops in the tower, regardless of the order they happened in.
pub fn rate(phase: GamePhase, stack: &[Block]) -> u8 {
    if phase != GamePhase::LevelComplete || stack.is_empty() {
        return 0;
    }

    let perfect = stack.iter().filter(|b| b.is_perfect).count();
    let ratio = perfect as f32 / stack.len() as f32;

    if ratio >= THREE_STAR_RATIO {
        3
    } else if ratio >= TWO_STAR_RATIO {
        2
    } else {
        1
    }
}
