//! Grid geometry: bounds, neighborhoods and line enumeration
//!
//! Everything here is a pure function of the board side. Diagonals are
//! addressed by offset `k`: the main diagonal at `k` holds the cells with
//! `col - row == k`, the anti-diagonal at `k` is the same diagonal taken on
//! the horizontally mirrored grid.

use std::ops::RangeInclusive;

use super::{Bitboard, Pos, WIN_LENGTH};

/// The 8 king-step directions
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (1, 0),   // down
    (0, 1),   // right
    (1, 1),   // down-right
    (1, -1),  // down-left
    (-1, 0),  // up
    (0, -1),  // left
    (-1, -1), // up-left
    (-1, 1),  // up-right
];

/// True iff both coordinates lie in `[0, size)`
#[inline]
pub fn in_bounds(size: usize, row: i32, col: i32) -> bool {
    let size = size as i32;
    row >= 0 && row < size && col >= 0 && col < size
}

/// Every in-bounds cell 8-adjacent to an occupied cell, minus the occupied cells.
pub fn expand_to_neighborhood(occupied: &Bitboard) -> Bitboard {
    let area = NEIGHBOR_OFFSETS
        .iter()
        .fold(occupied.clone(), |acc, &(dr, dc)| {
            acc.union(&occupied.shifted(dr, dc))
        });
    area.difference(occupied)
}

/// Diagonal offsets long enough to hold a winning run.
///
/// Returns `-(size-5)..=(size-5)`, which is empty for boards smaller than 5.
pub fn diagonal_range(size: usize) -> RangeInclusive<isize> {
    let reach = size as isize - WIN_LENGTH as isize;
    -reach..=reach
}

/// Cells of the main diagonal at offset `k`, top to bottom
pub fn diagonal_cells(size: usize, k: isize) -> Vec<Pos> {
    let n = size as isize;
    let first_row = (-k).max(0);
    let end_row = n.min(n - k);
    (first_row..end_row)
        .map(|r| Pos::new(r as u8, (r + k) as u8))
        .collect()
}

/// Cells of the mirrored-grid diagonal at offset `k`, top to bottom
pub fn anti_diagonal_cells(size: usize, k: isize) -> Vec<Pos> {
    diagonal_cells(size, k)
        .into_iter()
        .map(|p| Pos::new(p.row, (size - 1) as u8 - p.col))
        .collect()
}

/// A scanned line of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Row(usize),
    Column(usize),
    Diagonal(isize),
    AntiDiagonal(isize),
}

impl LineKind {
    /// Cells on this line, in scan order
    pub fn cells(self, size: usize) -> Vec<Pos> {
        match self {
            LineKind::Row(r) => (0..size).map(|c| Pos::new(r as u8, c as u8)).collect(),
            LineKind::Column(c) => (0..size).map(|r| Pos::new(r as u8, c as u8)).collect(),
            LineKind::Diagonal(k) => diagonal_cells(size, k),
            LineKind::AntiDiagonal(k) => anti_diagonal_cells(size, k),
        }
    }
}

/// Scan order: row `i` then column `i` for every index, then for every
/// offset in [`diagonal_range`] the diagonal then the anti-diagonal.
pub fn line_kinds(size: usize) -> impl Iterator<Item = LineKind> {
    let straight = (0..size).flat_map(|i| [LineKind::Row(i), LineKind::Column(i)]);
    let diagonal =
        diagonal_range(size).flat_map(|k| [LineKind::Diagonal(k), LineKind::AntiDiagonal(k)]);
    straight.chain(diagonal)
}

/// Number of lines [`line_kinds`] yields for a board side
pub fn expected_line_count(size: usize) -> usize {
    let diagonals = if size >= WIN_LENGTH { 2 * size - 9 } else { 0 };
    2 * size + 2 * diagonals
}
