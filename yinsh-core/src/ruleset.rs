//! RuleSet - tunable game parameters

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::board::{Board, BOARD_RADIUS, MAX_RADIUS};

/// Default rings placed by each player during setup
pub const RINGS_PER_PLAYER: u8 = 5;

/// Smallest radius whose board still fits a run of five
const MIN_RADIUS: f32 = 2.0;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RuleSetError {
    #[error("Board radius must be at least 2, got {0}")]
    RadiusTooSmall(f32),

    #[error("Board radius must be at most 60, got {0}")]
    RadiusTooLarge(f32),

    #[error("Each player needs at least one ring")]
    NoRings,

    #[error("{rings} rings do not fit on a board of {cells} cells")]
    TooManyRings { rings: usize, cells: usize },
}

/// Board size and ring allotment
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    pub name: String,
    /// Region radius in display units
    pub radius: f32,
    pub rings_per_player: u8,
}

impl RuleSet {
    /// Starting `remaining` count: every ring after the first
    pub fn initial_remaining(&self) -> u16 {
        u16::from(self.rings_per_player.max(1)) * 2 - 1
    }

    pub fn validate(&self) -> Result<(), RuleSetError> {
        if self.radius.is_nan() || self.radius < MIN_RADIUS {
            return Err(RuleSetError::RadiusTooSmall(self.radius));
        }
        if self.radius > MAX_RADIUS {
            return Err(RuleSetError::RadiusTooLarge(self.radius));
        }
        if self.rings_per_player == 0 {
            return Err(RuleSetError::NoRings);
        }

        let rings = self.rings_per_player as usize * 2;
        let cells = Board::empty(self.radius).len();
        if rings >= cells {
            return Err(RuleSetError::TooManyRings { rings, cells });
        }

        Ok(())
    }

    /// Load from JSON file; missing fields take their defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let ruleset: RuleSet = serde_json::from_str(&content)?;
        ruleset.validate()?;
        Ok(ruleset)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            name: "standard".to_string(),
            radius: BOARD_RADIUS,
            rings_per_player: RINGS_PER_PLAYER,
        }
    }
}
