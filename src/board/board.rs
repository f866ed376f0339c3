//! Immutable board state with copy-on-write move application

use std::sync::OnceLock;

use serde::Serialize;
use tracing::{debug, trace};

use super::bitboard::Bitboard;
use super::geometry::expand_to_neighborhood;
use super::{Pos, Stone};
use crate::config::{BoardConfig, OpeningPolicy};
use crate::error::{BoardError, BoardResult, MoveRejection};
use crate::rules::win;

/// Game board snapshot.
///
/// A board never changes after construction. [`Board::apply_move`] returns a
/// new board holding a private copy of the grid, so boards derived from the
/// same parent share nothing.
#[derive(Debug, Clone, Serialize)]
pub struct Board {
    size: usize,
    /// Row-major cells
    cells: Vec<Stone>,
    to_move: Stone,
    last_move: Option<Pos>,
    opening: OpeningPolicy,
    /// Result of the five-in-a-row scan, filled on first use
    #[serde(skip)]
    winner: OnceLock<Option<Stone>>,
}

impl Board {
    /// Empty `size` x `size` board with `first_player` to move
    pub fn new(size: usize, first_player: Stone) -> BoardResult<Self> {
        Self::from_config(&BoardConfig {
            size,
            first_player,
            opening: OpeningPolicy::default(),
        })
    }

    /// Empty board built from a configuration
    pub fn from_config(config: &BoardConfig) -> BoardResult<Self> {
        config.validate()?;
        Ok(Self {
            size: config.size,
            cells: vec![Stone::Empty; config.size * config.size],
            to_move: config.first_player,
            last_move: None,
            opening: config.opening,
            winner: OnceLock::new(),
        })
    }

    /// Board holding the given stones, with `to_move` to play next.
    ///
    /// Intended for setting up positions; `last_move` stays `None`.
    pub fn with_stones<I>(size: usize, to_move: Stone, stones: I) -> BoardResult<Self>
    where
        I: IntoIterator<Item = (Pos, Stone)>,
    {
        let mut board = Self::new(size, to_move)?;
        for (pos, stone) in stones {
            if !pos.in_bounds(size) {
                return Err(BoardError::OutOfRange { pos, size });
            }
            let cell = &mut board.cells[pos.to_index(size)];
            if cell.is_player() {
                return Err(BoardError::IllegalMove {
                    pos,
                    reason: MoveRejection::Occupied,
                });
            }
            *cell = stone;
        }
        Ok(board)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Color that places the next stone
    #[inline]
    pub fn to_move(&self) -> Stone {
        self.to_move
    }

    /// Most recently placed stone, if any
    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    #[inline]
    pub fn opening(&self) -> OpeningPolicy {
        self.opening
    }

    /// Get stone at position
    pub fn get(&self, pos: Pos) -> BoardResult<Stone> {
        if !pos.in_bounds(self.size) {
            return Err(BoardError::OutOfRange {
                pos,
                size: self.size,
            });
        }
        Ok(self.cells[pos.to_index(self.size)])
    }

    /// Check if position is on the board and empty
    #[inline]
    pub fn is_empty_at(&self, pos: Pos) -> bool {
        pos.in_bounds(self.size) && self.cells[pos.to_index(self.size)] == Stone::Empty
    }

    /// Play a stone for the side to move, returning the resulting board.
    ///
    /// The parent is untouched whether or not the move succeeds.
    pub fn apply_move(&self, pos: Pos) -> BoardResult<Board> {
        if !self.is_empty_at(pos) {
            let reason = if pos.in_bounds(self.size) {
                MoveRejection::Occupied
            } else {
                MoveRejection::OutOfRange
            };
            debug!(?pos, %reason, "rejected move");
            return Err(BoardError::IllegalMove { pos, reason });
        }

        let mut cells = self.cells.clone();
        cells[pos.to_index(self.size)] = self.to_move;
        trace!(?pos, stone = ?self.to_move, "applied move");

        Ok(Board {
            size: self.size,
            cells,
            to_move: self.to_move.opponent(),
            last_move: Some(pos),
            opening: self.opening,
            winner: OnceLock::new(),
        })
    }

    /// Mask of all cells holding a stone
    pub fn occupied(&self) -> Bitboard {
        let mut mask = Bitboard::new(self.size);
        for (idx, stone) in self.cells.iter().enumerate() {
            if stone.is_player() {
                mask.set(Pos::from_index(idx, self.size));
            }
        }
        mask
    }

    /// Candidate moves in row-major order.
    ///
    /// With stones on the board these are the empty cells next to a stone.
    /// On an empty board the [`OpeningPolicy`] decides.
    pub fn legal_moves(&self) -> Vec<Pos> {
        let occupied = self.occupied();
        if occupied.is_empty() {
            return self.opening_moves();
        }
        expand_to_neighborhood(&occupied).iter_ones().collect()
    }

    fn opening_moves(&self) -> Vec<Pos> {
        match self.opening {
            OpeningPolicy::Anywhere => (0..self.size * self.size)
                .map(|idx| Pos::from_index(idx, self.size))
                .collect(),
            OpeningPolicy::Center => {
                let mid = (self.size / 2) as u8;
                vec![Pos::new(mid, mid)]
            }
            OpeningPolicy::Deferred => Vec::new(),
        }
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|s| s.is_player()).count()
    }

    /// Check if board has no stones
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == Stone::Empty)
    }

    /// Row-major view of the grid
    #[inline]
    pub fn cells(&self) -> &[Stone] {
        &self.cells
    }

    /// Color with five in a row, scanning the grid on first call.
    ///
    /// Black is checked before White. The answer is cached on this board.
    pub fn check_five_in_a_row(&self) -> Option<Stone> {
        *self.winner.get_or_init(|| win::check_five_in_a_row(self))
    }

    /// Winner of the position, if any; `None` for ongoing games and draws
    #[inline]
    pub fn winner(&self) -> Option<Stone> {
        self.check_five_in_a_row()
    }

    /// No empty cell remains
    pub fn is_full(&self) -> bool {
        win::is_full(self)
    }

    /// Game over by five in a row or a full board
    pub fn is_terminal(&self) -> bool {
        win::is_terminal(self)
    }

    /// Rows, columns and long-enough diagonals, see [`win::lines`]
    pub fn lines(&self) -> win::Lines<'_> {
        win::lines(self)
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self.cells == other.cells
            && self.to_move == other.to_move
            && self.last_move == other.last_move
            && self.opening == other.opening
    }
}

impl Eq for Board {}

impl Default for Board {
    fn default() -> Self {
        let config = BoardConfig::default();
        Self {
            size: config.size,
            cells: vec![Stone::Empty; config.size * config.size],
            to_move: config.first_player,
            last_move: None,
            opening: config.opening,
            winner: OnceLock::new(),
        }
    }
}
