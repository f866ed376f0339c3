//! Win condition checking
//!
//! A side wins with five (or more) of its stones in a row along a row,
//! column or diagonal. Detection works on whole lines: every row, column and
//! every diagonal long enough to hold five is extracted from the grid and
//! searched for five consecutive stones of one color.

use tracing::{debug, instrument};

use crate::board::geometry::{line_kinds, LineKind};
use crate::board::{Board, Stone, WIN_LENGTH};

/// Winning pattern for a color: `WIN_LENGTH` stones of it in a row
#[inline]
pub fn five_of(color: Stone) -> [Stone; WIN_LENGTH] {
    [color; WIN_LENGTH]
}

/// Lazy iterator over the lines of a board.
///
/// Yields row `i` then column `i` for each index, then the diagonal and
/// anti-diagonal for each offset of
/// [`diagonal_range`](crate::board::geometry::diagonal_range).
pub struct Lines<'a> {
    board: &'a Board,
    kinds: std::vec::IntoIter<LineKind>,
}

impl Lines<'_> {
    /// Like `Iterator::next`, also reporting which line was extracted
    pub fn next_with_kind(&mut self) -> Option<(LineKind, Vec<Stone>)> {
        let kind = self.kinds.next()?;
        Some((kind, extract(self.board, kind)))
    }
}

impl Iterator for Lines<'_> {
    type Item = Vec<Stone>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_with_kind().map(|(_, line)| line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.kinds.size_hint()
    }
}

impl ExactSizeIterator for Lines<'_> {}

fn extract(board: &Board, kind: LineKind) -> Vec<Stone> {
    let size = board.size();
    let cells = board.cells();
    kind.cells(size)
        .into_iter()
        .map(|pos| cells[pos.to_index(size)])
        .collect()
}

/// All scanned lines of the board, recomputed on every call
pub fn lines(board: &Board) -> Lines<'_> {
    Lines {
        board,
        kinds: line_kinds(board.size()).collect::<Vec<_>>().into_iter(),
    }
}

/// True iff `pattern` occurs as a contiguous run inside `line`.
///
/// A line shorter than the pattern never matches; an empty pattern always does.
pub fn contains_pattern(line: &[Stone], pattern: &[Stone]) -> bool {
    if pattern.is_empty() {
        return true;
    }
    line.windows(pattern.len()).any(|window| window == pattern)
}

/// Number of lines containing `pattern`
pub fn count_pattern_lines(board: &Board, pattern: &[Stone]) -> usize {
    lines(board)
        .filter(|line| contains_pattern(line, pattern))
        .count()
}

fn has_five(board: &Board, color: Stone) -> bool {
    let pattern = five_of(color);
    lines(board).any(|line| contains_pattern(&line, &pattern))
}

/// Full scan for five in a row. Black is checked first.
///
/// Both colors cannot hold a five at once on a board reached by play, so the
/// order only matters for hand-built positions.
#[instrument(skip(board), fields(size = board.size()))]
pub fn check_five_in_a_row(board: &Board) -> Option<Stone> {
    for color in [Stone::Black, Stone::White] {
        if has_five(board, color) {
            debug!(?color, "five in a row");
            return Some(color);
        }
    }
    None
}

/// No empty cell remains
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|s| s.is_player())
}

/// A board is terminal when full or won.
///
/// The win scan runs first so the board's winner cache is always filled.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_terminal(board: &Board) -> bool {
    let won = board.check_five_in_a_row().is_some();
    if is_full(board) {
        return true;
    }
    won
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    fn board_with(size: usize, stones: &[(u8, u8, Stone)]) -> Board {
        Board::with_stones(
            size,
            Stone::Black,
            stones.iter().map(|&(r, c, s)| (Pos::new(r, c), s)),
        )
        .unwrap()
    }

    fn run(color: Stone, cells: impl Iterator<Item = (u8, u8)>) -> Vec<(u8, u8, Stone)> {
        cells.map(|(r, c)| (r, c, color)).collect()
    }

    #[test]
    fn test_contains_pattern() {
        use Stone::{Black as B, Empty as E, White as W};
        let line = [E, B, B, B, B, B, W];
        assert!(contains_pattern(&line, &five_of(B)));
        assert!(!contains_pattern(&line, &five_of(W)));
        assert!(contains_pattern(&line, &[B, W]));
        assert!(!contains_pattern(&line, &[W, B]));
    }

    #[test]
    fn test_contains_pattern_short_line() {
        let line = [Stone::Black; 4];
        assert!(!contains_pattern(&line, &five_of(Stone::Black)));
        assert!(!contains_pattern(&[], &five_of(Stone::Black)));
    }

    #[test]
    fn test_contains_pattern_exact_length() {
        let line = [Stone::White; 5];
        assert!(contains_pattern(&line, &five_of(Stone::White)));
    }

    #[test]
    fn test_empty_pattern_matches() {
        assert!(contains_pattern(&[Stone::Empty], &[]));
        assert!(contains_pattern(&[], &[]));
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let board = board_with(10, &run(Stone::Black, (0..5).map(|c| (0, c))));
        assert_eq!(check_five_in_a_row(&board), Some(Stone::Black));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let board = board_with(10, &run(Stone::White, (3..8).map(|r| (r, 9))));
        assert_eq!(check_five_in_a_row(&board), Some(Stone::White));
    }

    #[test]
    fn test_five_in_row_diagonal() {
        let board = board_with(10, &run(Stone::White, (0..5).map(|i| (i + 2, i + 4))));
        assert_eq!(check_five_in_a_row(&board), Some(Stone::White));
    }

    #[test]
    fn test_five_in_row_anti_diagonal() {
        // Diagonal from (4, 8) to (8, 4)
        let board = board_with(10, &run(Stone::Black, (0..5).map(|i| (4 + i, 8 - i))));
        assert_eq!(check_five_in_a_row(&board), Some(Stone::Black));
    }

    #[test]
    fn test_five_on_shortest_diagonals() {
        let corner = board_with(10, &run(Stone::Black, (0..5).map(|i| (i, 5 + i))));
        assert_eq!(check_five_in_a_row(&corner), Some(Stone::Black));

        let mirrored = board_with(10, &run(Stone::White, (0..5).map(|i| (5 + i, 9 - i))));
        assert_eq!(check_five_in_a_row(&mirrored), Some(Stone::White));
    }

    #[test]
    fn test_every_five_is_detected() {
        let dirs: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];
        for size in 5..=12usize {
            for (dr, dc) in dirs {
                for r in 0..size as i32 {
                    for c in 0..size as i32 {
                        let (end_r, end_c) = (r + dr * 4, c + dc * 4);
                        if !crate::board::geometry::in_bounds(size, end_r, end_c) {
                            continue;
                        }
                        for color in [Stone::Black, Stone::White] {
                            let cells = (0..5).map(|i| ((r + dr * i) as u8, (c + dc * i) as u8));
                            let board = board_with(size, &run(color, cells));
                            assert_eq!(
                                check_five_in_a_row(&board),
                                Some(color),
                                "size {size}, start ({r}, {c}), direction ({dr}, {dc})"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let board = board_with(10, &run(Stone::Black, (0..6).map(|c| (9, c))));
        assert_eq!(check_five_in_a_row(&board), Some(Stone::Black));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let board = board_with(10, &run(Stone::Black, (0..4).map(|c| (9, c))));
        assert_eq!(check_five_in_a_row(&board), None);
    }

    #[test]
    fn test_broken_run_not_win() {
        let mut stones = run(Stone::Black, [0u8, 1, 3, 4, 5].into_iter().map(|c| (2, c)));
        stones.push((2, 2, Stone::White));
        let board = board_with(10, &stones);
        assert_eq!(check_five_in_a_row(&board), None);
    }

    #[test]
    fn test_black_checked_first() {
        let mut stones = run(Stone::White, (0..5).map(|c| (0, c)));
        stones.extend(run(Stone::Black, (0..5).map(|c| (9, c))));
        let board = board_with(10, &stones);
        assert_eq!(check_five_in_a_row(&board), Some(Stone::Black));
    }

    #[test]
    fn test_no_winner_on_small_board() {
        let board = board_with(4, &run(Stone::Black, (0..4).map(|c| (0, c))));
        assert_eq!(check_five_in_a_row(&board), None);
    }

    #[test]
    fn test_lines_count_and_lengths() {
        for size in [1usize, 4, 5, 10, 15] {
            let board = Board::new(size, Stone::Black).unwrap();
            let lines = lines(&board);
            assert_eq!(lines.len(), crate::board::geometry::expected_line_count(size));
            let mut count = 0;
            for line in lines {
                assert!(!line.is_empty() && line.len() <= size);
                count += 1;
            }
            assert_eq!(count, crate::board::geometry::expected_line_count(size));
        }
    }

    #[test]
    fn test_lines_order() {
        let board = board_with(5, &[(0, 4, Stone::Black), (4, 0, Stone::White)]);
        let mut lines = lines(&board);
        let (kind, row0) = lines.next_with_kind().unwrap();
        assert_eq!(kind, LineKind::Row(0));
        assert_eq!(row0[4], Stone::Black);

        let (kind, col0) = lines.next_with_kind().unwrap();
        assert_eq!(kind, LineKind::Column(0));
        assert_eq!(col0[4], Stone::White);

        let rest: Vec<Vec<Stone>> = lines.collect();
        // 8 more rows/columns, then the main diagonal and the anti-diagonal
        assert_eq!(rest.len(), 10);
        assert_eq!(rest[8], vec![Stone::Empty; 5]);
        assert_eq!(
            rest[9],
            vec![Stone::Black, Stone::Empty, Stone::Empty, Stone::Empty, Stone::White]
        );
    }

    #[test]
    fn test_count_pattern_lines() {
        // Row 0 and the main diagonal share (0, 0); both hold a Black five.
        let mut stones = run(Stone::Black, (0..5).map(|c| (0, c)));
        stones.extend(run(Stone::Black, (1..5).map(|i| (i, i))));
        let board = board_with(6, &stones);
        assert_eq!(count_pattern_lines(&board, &five_of(Stone::Black)), 2);
        assert_eq!(count_pattern_lines(&board, &five_of(Stone::White)), 0);
    }

    #[test]
    fn test_is_full() {
        let empty = Board::new(3, Stone::Black).unwrap();
        assert!(!is_full(&empty));

        let stones: Vec<_> = (0..3u8)
            .flat_map(|r| (0..3u8).map(move |c| (r, c)))
            .map(|(r, c)| (r, c, if (r + c) % 2 == 0 { Stone::Black } else { Stone::White }))
            .collect();
        let full = board_with(3, &stones);
        assert!(is_full(&full));
        assert!(is_terminal(&full));
        assert_eq!(full.winner(), None);
    }
}
