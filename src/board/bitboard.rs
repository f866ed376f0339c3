//! Size-aware cell mask used for occupancy and neighborhood sets

use super::Pos;

/// One bit per cell, row-major, packed into `u64` words
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bitboard {
    size: usize,
    bits: Vec<u64>,
}

impl Bitboard {
    /// Create an empty mask for a `size` x `size` board
    pub fn new(size: usize) -> Self {
        let words = (size * size).div_ceil(64);
        Self {
            size,
            bits: vec![0; words],
        }
    }

    /// Board side this mask covers
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Set a bit at position
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the board.
    #[inline]
    pub fn set(&mut self, pos: Pos) {
        assert!(pos.in_bounds(self.size), "{pos} is off a {0}x{0} mask", self.size);
        let idx = pos.to_index(self.size);
        self.bits[idx / 64] |= 1u64 << (idx % 64);
    }

    /// Clear a bit at position
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the board.
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        assert!(pos.in_bounds(self.size), "{pos} is off a {0}x{0} mask", self.size);
        let idx = pos.to_index(self.size);
        self.bits[idx / 64] &= !(1u64 << (idx % 64));
    }

    /// Check if bit is set at position; positions off the board are never set
    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        if !pos.in_bounds(self.size) {
            return false;
        }
        let idx = pos.to_index(self.size);
        (self.bits[idx / 64] >> (idx % 64)) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Cells set in either mask
    pub fn union(&self, other: &Bitboard) -> Bitboard {
        debug_assert_eq!(self.size, other.size);
        Bitboard {
            size: self.size,
            bits: self
                .bits
                .iter()
                .zip(&other.bits)
                .map(|(a, b)| a | b)
                .collect(),
        }
    }

    /// Cells set in `self` but not in `other`
    pub fn difference(&self, other: &Bitboard) -> Bitboard {
        debug_assert_eq!(self.size, other.size);
        Bitboard {
            size: self.size,
            bits: self
                .bits
                .iter()
                .zip(&other.bits)
                .map(|(a, b)| a & !b)
                .collect(),
        }
    }

    /// Every set cell moved by `(dr, dc)`; cells pushed off the board are dropped
    pub fn shifted(&self, dr: i32, dc: i32) -> Bitboard {
        let mut out = Bitboard::new(self.size);
        for pos in self.iter_ones() {
            if let Some(moved) = pos.offset(dr, dc, self.size) {
                out.set(moved);
            }
        }
        out
    }

    /// Iterate over set bit positions in row-major order
    pub fn iter_ones(&self) -> BitboardIter<'_> {
        BitboardIter {
            board: self,
            word_idx: 0,
            current_word: self.bits.first().copied().unwrap_or(0),
        }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter<'a> {
    board: &'a Bitboard,
    word_idx: usize,
    current_word: u64,
}

impl Iterator for BitboardIter<'_> {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current_word == 0 {
            self.word_idx += 1;
            if self.word_idx >= self.board.bits.len() {
                return None;
            }
            self.current_word = self.board.bits[self.word_idx];
        }

        let bit_pos = self.current_word.trailing_zeros() as usize;
        let idx = self.word_idx * 64 + bit_pos;

        // Clear the bit we just found
        self.current_word &= self.current_word - 1;

        // Padding bits past the last cell are never set
        debug_assert!(idx < self.board.size * self.board.size);
        Some(Pos::from_index(idx, self.board.size))
    }
}
