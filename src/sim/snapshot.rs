//! Read-only view handed to the renderer

use serde::{Deserialize, Serialize};

use super::drop::DropOutcome;
use super::state::{Block, GamePhase};

/// Result of the most recent drop, for the flash label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Feedback {
    #[default]
    None,
    Perfect,
    Good,
}

impl From<DropOutcome> for Feedback {
    fn from(outcome: DropOutcome) -> Self {
        match outcome {
            DropOutcome::Perfect => Feedback::Perfect,
            DropOutcome::Good => Feedback::Good,
            DropOutcome::Miss => Feedback::None,
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub level_index: usize,
    pub level_number: u32,
    pub target_blocks: usize,
    pub score: u64,
    pub combo: u32,
    pub stack: Vec<Block>,
    pub pending_width: f32,
    pub hook_x: f32,
    pub feedback: Feedback,
    /// Only set once the session has ended
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub stars: Option<u8>,
    pub elapsed_ms: f64,
}

impl Snapshot {
    /// Blocks still needed to clear the level
    pub fn remaining(&self) -> usize {
        self.target_blocks.saturating_sub(self.stack.len())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_from_outcome() {
        assert_eq!(Feedback::from(DropOutcome::Perfect), Feedback::Perfect);
        assert_eq!(Feedback::from(DropOutcome::Good), Feedback::Good);
        assert_eq!(Feedback::from(DropOutcome::Miss), Feedback::None);
    }

    #[test]
    fn test_json_omits_stars_while_playing() {
        let snapshot = Snapshot {
            phase: GamePhase::Playing,
            level_index: 0,
            level_number: 1,
            target_blocks: 7,
            score: 0,
            combo: 0,
            stack: Vec::new(),
            pending_width: 48.0,
            hook_x: 50.0,
            feedback: Feedback::None,
            stars: None,
            elapsed_ms: 0.0,
        };
        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"phase\":\"Playing\""));
        assert!(!json.contains("stars"));
        assert_eq!(snapshot.remaining(), 7);

        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
