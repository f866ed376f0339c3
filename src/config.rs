//! Board configuration
//!
//! A [`BoardConfig`] can be built in code or read from TOML:
//!
//! ```toml
//! size = 15
//! first_player = "black"
//! opening = "center"
//! ```
//!
//! Missing keys fall back to [`BoardConfig::default`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::{Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
use crate::error::BoardError;

/// Legal moves offered on a board with no stones.
///
/// Once any stone is placed, legal moves are always the empty cells next to
/// existing stones; this only decides the very first move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningPolicy {
    /// Any cell of the board
    #[default]
    Anywhere,
    /// Only the center cell
    Center,
    /// No moves; the caller picks the first move itself
    Deferred,
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Board setup parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Side of the square grid
    pub size: usize,
    /// Color that places the first stone
    pub first_player: Stone,
    pub opening: OpeningPolicy,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            first_player: Stone::Black,
            opening: OpeningPolicy::Anywhere,
        }
    }
}

impl BoardConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Check the size range and that the first player is a color
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.size == 0 || self.size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidSize(self.size));
        }
        if !self.first_player.is_player() {
            return Err(BoardError::InvalidPlayer);
        }
        Ok(())
    }
}
