//! Game rules for five-in-a-row
//!
//! The only rule with content is the win condition: five stones of one color
//! in a row on a row, column or diagonal. A full board without a five ends the
//! game as a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{
    check_five_in_a_row, contains_pattern, count_pattern_lines, five_of, is_full, is_terminal,
    lines, Lines,
};
