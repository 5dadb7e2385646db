//! Level generation
//!
//! Every level is derived from its 1-based number, so the table is fully
//! deterministic and never needs to be stored.

use serde::{Deserialize, Serialize};

/// An sRGB color (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Hex string like `#ff8800`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Fixed palette table, assigned to levels round-robin
pub const PALETTES: [&[Rgb]; 5] = [
    // Sunset
    &[
        Rgb(0xff, 0x6b, 0x6b),
        Rgb(0xff, 0x9f, 0x43),
        Rgb(0xfe, 0xca, 0x57),
        Rgb(0xff, 0x7e, 0xb3),
    ],
    // Ocean
    &[
        Rgb(0x48, 0xdb, 0xfb),
        Rgb(0x0a, 0xbd, 0xe3),
        Rgb(0x54, 0xa0, 0xff),
        Rgb(0x2e, 0x86, 0xde),
    ],
    // Forest
    &[
        Rgb(0x1d, 0xd1, 0xa1),
        Rgb(0x10, 0xac, 0x84),
        Rgb(0x7b, 0xed, 0x9f),
        Rgb(0x2e, 0xd5, 0x73),
    ],
    // Candy
    &[
        Rgb(0xf3, 0x68, 0xe0),
        Rgb(0xbe, 0x2e, 0xdd),
        Rgb(0xff, 0x9f, 0xf3),
        Rgb(0x5f, 0x27, 0xcd),
    ],
    // Ember
    &[
        Rgb(0xee, 0x52, 0x53),
        Rgb(0xff, 0x63, 0x48),
        Rgb(0xff, 0xa5, 0x02),
        Rgb(0xe1, 0x70, 0x55),
    ],
];

/// Immutable per-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// 1-based level number
    pub level_number: u32,
    /// Blocks needed to clear the level
    pub target_blocks: usize,
    /// Width of the first falling block (percent of field)
    pub initial_width: f32,
    /// Hook swing speed multiplier
    pub base_speed: f32,
    /// Colors cycled through as blocks are stacked
    pub color_palette: Vec<Rgb>,
}

impl LevelConfig {
    /// Build the configuration for a 1-based level number
    pub fn for_level(level_number: u32) -> Self {
        let n = level_number.max(1);
        let palette = PALETTES[((n - 1) as usize) % PALETTES.len()];
        Self {
            level_number: n,
            target_blocks: 5 + 2 * n as usize,
            initial_width: (50.0 - 2.0 * n as f32).max(20.0),
            base_speed: 1.0 + 0.2 * n as f32,
            color_palette: palette.to_vec(),
        }
    }

    /// Color for the block at the given stack height
    pub fn color_for(&self, vertical_index: usize) -> Rgb {
        if self.color_palette.is_empty() {
            return Rgb(0xff, 0xff, 0xff);
        }
        self.color_palette[vertical_index % self.color_palette.len()]
    }
}

/// Generate `count` levels, numbered from 1
pub fn generate_levels(count: usize) -> Vec<LevelConfig> {
    (1..=count as u32).map(LevelConfig::for_level).collect()
}
