//! Contract-based validation for ultimate tic-tac-toe moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, UltimateInvariants};
use super::state::GameState;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game must still be running.
pub struct GameRunning;

impl GameRunning {
    /// Rejects moves after the game has finished.
    pub fn check(_mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if state.running {
            Ok(())
        } else {
            Err(MoveError::GameOver)
        }
    }
}

/// Precondition: the target sub-board must be undecided.
pub struct BoardUndecided;

impl BoardUndecided {
    /// Rejects moves into decided sub-boards.
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if state.meta.result(mov.board).is_undecided() {
            Ok(())
        } else {
            Err(MoveError::BoardDecided(mov.board))
        }
    }
}

/// Precondition: the target sub-board must satisfy the active constraint.
pub struct BoardIsActive;

impl BoardIsActive {
    /// Rejects moves outside the forced sub-board.
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if state.active.allows(mov.board) {
            Ok(())
        } else {
            Err(MoveError::InactiveBoard {
                requested: mov.board,
                active: state.active,
            })
        }
    }
}

/// Precondition: the target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves onto occupied cells.
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        if state.meta.board(mov.board).is_empty(mov.cell) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied {
                board: mov.board,
                cell: mov.cell,
            })
        }
    }
}

/// Composite precondition, checked in a fixed order so the reported
/// reason is deterministic.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        GameRunning::check(mov, state)?;
        BoardUndecided::check(mov, state)?;
        BoardIsActive::check(mov, state)?;
        CellIsEmpty::check(mov, state)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Postconditions:
/// - All state invariants hold afterwards
/// - Every sub-board decided before the move keeps its result
pub struct MoveContract;

impl Contract<GameState, Move> for MoveContract {
    fn pre(state: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        let mut problems: Vec<String> = match UltimateInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations.into_iter().map(|v| v.description).collect(),
        };

        let results_final = before
            .meta
            .results()
            .iter()
            .zip(after.meta.results())
            .all(|(was, now)| was.is_undecided() || was == now);
        if !results_final {
            problems.push("Decided sub-boards keep their result".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: {}",
                problems.join("; ")
            )))
        }
    }
}
