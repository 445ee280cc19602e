//! Full-board detection and the last-before-full rule.

use super::super::{Player, Square, SubBoard};
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(level = "trace")]
pub fn is_full(board: &SubBoard) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Decides a board after `just_played` moved on it.
///
/// A line wins for its owner, and takes precedence over fullness. A board
/// that fills without a line goes to the player who did *not* make the
/// filling move. Anything else is still open.
#[instrument(level = "trace")]
pub fn last_before_full(board: &SubBoard, just_played: Player) -> Option<Player> {
    if let Some(winner) = check_winner(board) {
        return Some(winner);
    }

    if is_full(board) {
        return Some(just_played.opponent());
    }

    None
}
