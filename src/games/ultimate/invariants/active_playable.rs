//! The active sub-board must be playable.

use super::super::phases::ActiveBoard;
use super::super::state::GameState;
use super::Invariant;

/// Invariant: while the game runs, a forced sub-board is undecided.
///
/// Landing on a decided board frees the next move, so a forced
/// decided board would leave the mover with no legal cell.
pub struct ActiveBoardPlayableInvariant;

impl Invariant<GameState> for ActiveBoardPlayableInvariant {
    fn holds(state: &GameState) -> bool {
        match state.active {
            ActiveBoard::Board(board) if state.running => state.meta.result(board).is_undecided(),
            _ => true,
        }
    }

    fn description() -> &'static str {
        "Active sub-board is undecided while the game runs"
    }
}
