//! Read-only observation handed to a presentation layer.

use super::super::grid::{Player, Position, Square};
use super::action::Move;
use super::meta::BoardResult;
use super::phases::{ActiveBoard, Victory};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Owned snapshot of everything a renderer needs.
///
/// Built fresh from the engine on request; holding one never blocks or
/// aliases engine state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Cells of every sub-board, `boards[board][cell]`, row-major.
    pub boards: [[Square; 9]; 9],
    /// Result of every sub-board.
    pub results: [BoardResult; 9],
    /// Player to move (the winner's turn is not flipped on the last move).
    pub current_player: Player,
    /// Constraint on the next move.
    pub active: ActiveBoard,
    /// False once the game is finished.
    pub running: bool,
    /// Winner and highlighted sub-boards once finished.
    pub winner: Option<Victory>,
    /// Whether `undo` would revert a move.
    pub can_undo: bool,
    /// The move that produced this state, if any.
    pub last_move: Option<Move>,
}

impl GameView {
    /// Returns true if the next move may go into `board`.
    pub fn is_playable(&self, board: Position) -> bool {
        self.running && self.results[board.to_index()].is_undecided() && self.active.allows(board)
    }

    /// Returns the square at `cell` in sub-board `board`.
    pub fn square(&self, board: Position, cell: Position) -> Square {
        self.boards[board.to_index()][cell.to_index()]
    }

    /// Serializes the view as JSON.
    #[instrument(skip(self))]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
