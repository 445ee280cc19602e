//! First-class action types for ultimate tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent the
//! player's intent and can be validated independently of execution.

use super::super::grid::Position;
use super::phases::ActiveBoard;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a cell inside a sub-board.
///
/// The mover is implied by the engine's turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Sub-board on the meta-board.
    pub board: Position,
    /// Cell inside that sub-board. Also names the next active sub-board.
    pub cell: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(board: Position, cell: Position) -> Self {
        Self { board, cell }
    }

    /// Creates a move from raw indices (0-8 each).
    #[instrument]
    pub fn from_indices(board: usize, cell: usize) -> Result<Self, MoveError> {
        let board = Position::from_index(board).ok_or(MoveError::OutOfBounds(board))?;
        let cell = Position::from_index(cell).ok_or(MoveError::OutOfBounds(cell))?;
        Ok(Self { board, cell })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.board.label(), self.cell.label())
    }
}

/// Error that can occur when validating or applying a move.
///
/// Every variant is recoverable: a rejected move leaves the game untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The target sub-board already has a result.
    #[display("Board {} is already decided", _0)]
    BoardDecided(Position),

    /// The move is outside the active sub-board.
    #[display("Board {} is not playable; next move must be in {}", requested, active)]
    InactiveBoard {
        /// Sub-board the move targeted.
        requested: Position,
        /// The constraint in force.
        active: ActiveBoard,
    },

    /// The target cell is taken.
    #[display("Square {} in board {} is already occupied", cell, board)]
    SquareOccupied {
        /// Sub-board of the move.
        board: Position,
        /// Occupied cell.
        cell: Position,
    },

    /// A raw index was not in 0-8.
    #[display("Index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Error returned when undo has nothing to revert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum UndoError {
    /// Only the floor snapshot remains.
    #[display("Nothing to undo")]
    HistoryExhausted,
}

impl std::error::Error for UndoError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_indices_bounds() {
        assert_eq!(
            Move::from_indices(4, 8),
            Ok(Move::new(Position::Center, Position::BottomRight))
        );
        assert_eq!(Move::from_indices(9, 0), Err(MoveError::OutOfBounds(9)));
        assert_eq!(Move::from_indices(0, 11), Err(MoveError::OutOfBounds(11)));
    }

    #[test]
    fn test_error_messages() {
        let err = MoveError::InactiveBoard {
            requested: Position::TopLeft,
            active: ActiveBoard::Board(Position::Center),
        };
        assert_eq!(
            err.to_string(),
            "Board Top-left is not playable; next move must be in Center"
        );
        assert_eq!(UndoError::HistoryExhausted.to_string(), "Nothing to undo");
    }
}
