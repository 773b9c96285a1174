//! File-backed settings for the CLI and the AI facade.
//!
//! ```toml
//! [ai]
//! difficulty = "hard"
//! color = "black"
//! search_depth = 3
//! seed = 42
//!
//! [puzzle]
//! difficulty = "medium"
//! ```
//!
//! Every key is optional; missing keys take the defaults below.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::chess_errors::ChessErrors;
use crate::difficulty::Difficulty;
use crate::game_state::chess_types::Color;

pub const DEFAULT_SEARCH_DEPTH: u8 = 2;
pub const MAX_SEARCH_DEPTH: u8 = 4;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LockChessConfig {
    pub ai: AiConfig,
    pub puzzle: PuzzleConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AiConfig {
    pub difficulty: Difficulty,
    pub color: Color,
    /// Plies searched by the Hard tier.
    pub search_depth: u8,
    /// Fixed seed for the Easy tier and random puzzle selection.
    pub seed: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            color: Color::Black,
            search_depth: DEFAULT_SEARCH_DEPTH,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PuzzleConfig {
    /// Restrict random puzzles to one tier.
    pub difficulty: Option<Difficulty>,
}

impl LockChessConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ChessErrors> {
        let config: Self =
            toml::from_str(text).map_err(|e| ChessErrors::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChessErrors> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            ChessErrors::InvalidConfig(format!("failed to read {}: {e}", path.display()))
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), ?config, "configuration loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ChessErrors> {
        if !(1..=MAX_SEARCH_DEPTH).contains(&self.ai.search_depth) {
            return Err(ChessErrors::InvalidConfig(format!(
                "search_depth must be between 1 and {MAX_SEARCH_DEPTH}, got {}",
                self.ai.search_depth
            )));
        }
        Ok(())
    }
}
