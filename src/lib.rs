//! Five-in-a-row board engine
//!
//! Immutable board state for Gomoku-style games on any square grid:
//! - Moves produce new boards; a board never changes once built
//! - Legal moves are the empty cells next to existing stones
//! - Five (or more) stones in a row on a row, column or diagonal wins
//! - A full board without a five is a draw
//!
//! # Architecture
//!
//! - [`board`]: Stones, positions, cell masks, grid geometry and the board itself
//! - [`rules`]: Line extraction and win detection
//! - [`config`]: Board setup, loadable from TOML
//! - [`error`]: Error types
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Board, Pos, Stone};
//!
//! let mut board = Board::new(10, Stone::Black).unwrap();
//! for col in 0..5 {
//!     board = board.apply_move(Pos::new(4, col)).unwrap();
//!     if !board.is_terminal() {
//!         board = board.apply_move(Pos::new(5, col)).unwrap();
//!     }
//! }
//!
//! assert!(board.is_terminal());
//! assert_eq!(board.winner(), Some(Stone::Black));
//! ```
//!
//! Searchers drive the board through [`Board::legal_moves`],
//! [`Board::apply_move`] and [`Board::is_terminal`]. Boards are `Send + Sync`,
//! so sibling positions can be explored from different threads.

pub mod board;
pub mod config;
pub mod error;
pub mod rules;

// Re-export commonly used types for convenience
pub use board::{Bitboard, Board, Pos, Stone, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, WIN_LENGTH};
pub use config::{BoardConfig, ConfigError, OpeningPolicy};
pub use error::{BoardError, BoardResult, MoveRejection};
