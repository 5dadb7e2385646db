//! Runtime settings
//!
//! Loaded from an optional JSON file; any missing field takes its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Engine and demo configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of levels before play wraps back to the first
    pub level_count: usize,
    /// Simulation tick rate (Hz)
    pub tick_hz: u32,

    // === Demo player ===
    /// Seed for the demo player's RNG
    pub demo_seed: u64,
    /// Demo player accuracy (0.0 - 1.0)
    pub demo_skill: f32,
    /// Sessions the headless runner plays before exiting
    pub demo_rounds: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level_count: 10,
            tick_hz: 60,
            demo_seed: 0x5eed_cafe,
            demo_skill: 0.75,
            demo_rounds: 3,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp values the engine cannot run with
    fn sanitized(mut self) -> Self {
        self.level_count = self.level_count.max(1);
        self.tick_hz = self.tick_hz.max(1);
        self.demo_skill = self.demo_skill.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{"level_count": 4}"#).unwrap();
        assert_eq!(settings.level_count, 4);
        assert_eq!(settings.tick_hz, 60);
        assert_eq!(settings.demo_rounds, 3);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let settings =
            Settings::from_json(r#"{"level_count": 0, "tick_hz": 0, "demo_skill": 3.5}"#).unwrap();
        assert_eq!(settings.level_count, 1);
        assert_eq!(settings.tick_hz, 1);
        assert_eq!(settings.demo_skill, 1.0);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Settings::from_json("{level_count:").is_err());
        assert!(Settings::from_json(r#"{"tick_hz": "fast"}"#).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            demo_seed: 99,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_from("/nonexistent/tower-stack/settings.json");
        assert_eq!(settings, Settings::default());
    }
}
