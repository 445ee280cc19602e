//! Three-piece sliding tic-tac-toe.
//!
//! Each player places up to three pieces; after that a turn moves one
//! of the mover's pieces to an empty square.

mod game;

pub use game::{MAX_PIECES, SlideError, SlidingGame, SlidingMove};
