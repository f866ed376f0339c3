//! Error types for board operations

use std::fmt;

use crate::board::{Pos, MAX_BOARD_SIZE};

/// Why a move was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// Target lies outside the grid
    OutOfRange,
    /// Target already holds a stone
    Occupied,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::OutOfRange => f.write_str("outside the board"),
            MoveRejection::Occupied => f.write_str("cell is occupied"),
        }
    }
}

/// Board errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Read accessor called with a position outside the grid
    #[error("position {pos} is outside a {size}x{size} board")]
    OutOfRange { pos: Pos, size: usize },

    /// Move target is off the board or not empty
    #[error("illegal move at {pos}: {reason}")]
    IllegalMove { pos: Pos, reason: MoveRejection },

    /// Board side outside `1..=MAX_BOARD_SIZE`
    #[error("board size must be between 1 and {max}, got {0}", max = MAX_BOARD_SIZE)]
    InvalidSize(usize),

    /// `Empty` given where a player color is required
    #[error("expected black or white, got empty")]
    InvalidPlayer,
}

/// Result type for board operations
pub type BoardResult<T> = Result<T, BoardError>;
