//! Game rules for 3x3 grids.
//!
//! Pure functions over board contents. Rules are separated from board
//! storage so both variants and the meta-board can share them.

pub mod full;
pub mod win;

pub use full::{is_full, last_before_full};
pub use win::{LINES, Line, check_winner, winning_line};
