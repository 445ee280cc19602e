//! Shared 3x3 grid primitives: players, squares, positions, line rules.

mod position;
pub mod rules;
mod types;

pub use position::Position;
pub use types::{Player, Square, SubBoard};

/// Alias for clarity when talking about what sits in a cell.
pub type Mark = Player;
