//! Text rendering of boards
//!
//! ```text
//!    1 2 3 4 5
//!  1 . . . . .
//!  2 . X O . .
//!  3 . . X*. .
//!  4 . . . . .
//!  5 . . . . .
//! ```
//!
//! Columns past the tenth wrap their digit and carry an apostrophe
//! (`1'` is column 11). The last move is marked with `*`.

use std::fmt;

use super::{Board, Pos, Stone};

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();

        write!(f, "   ")?;
        for col in 0..size {
            let mark = if col < 10 { ' ' } else { '\'' };
            write!(f, "{}{}", (col + 1) % 10, mark)?;
        }
        writeln!(f)?;

        for row in 0..size {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "{:>2} ", row + 1)?;
            for col in 0..size {
                let pos = Pos::new(row as u8, col as u8);
                let stone = self.cells()[pos.to_index(size)];
                let marker = if self.last_move() == Some(pos) { '*' } else { ' ' };
                write!(f, "{}{}", stone.symbol(), marker)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_board() {
        let board = Board::new(3, Stone::Black).unwrap();
        assert_eq!(board.to_string(), "   1 2 3 \n 1 . . . \n 2 . . . \n 3 . . . ");
    }

    #[test]
    fn test_render_marks_last_move() {
        let board = Board::new(3, Stone::Black)
            .unwrap()
            .apply_move(Pos::new(0, 0))
            .unwrap()
            .apply_move(Pos::new(1, 1))
            .unwrap();
        assert_eq!(board.to_string(), "   1 2 3 \n 1 X . . \n 2 . O*. \n 3 . . . ");
    }

    #[test]
    fn test_render_wide_header() {
        let board = Board::new(12, Stone::Black).unwrap();
        let text = board.to_string();
        let header = text.lines().next().unwrap();
        assert_eq!(header, "   1 2 3 4 5 6 7 8 9 0 1'2'");
        let last = text.lines().last().unwrap();
        assert!(last.starts_with("12 . "));
    }

    #[test]
    fn test_stone_and_pos_display() {
        assert_eq!(Stone::Black.to_string(), "X");
        assert_eq!(Stone::White.to_string(), "O");
        assert_eq!(Stone::Empty.to_string(), ".");
        assert_eq!(Pos::new(3, 4).to_string(), "(3, 4)");
    }
}
