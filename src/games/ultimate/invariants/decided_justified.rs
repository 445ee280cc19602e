//! Decided sub-boards must have a reason to be decided.

use super::super::super::grid::rules::{check_winner, is_full};
use super::super::state::GameState;
use super::Invariant;

/// Invariant: every decided sub-board has a line or is full.
pub struct DecidedBoardsJustifiedInvariant;

impl Invariant<GameState> for DecidedBoardsJustifiedInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .meta
            .boards()
            .iter()
            .zip(state.meta.results())
            .all(|(board, result)| {
                result.is_undecided() || check_winner(board).is_some() || is_full(board)
            })
    }

    fn description() -> &'static str {
        "Decided sub-boards hold a line or are full"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::grid::{Player, Position};
    use crate::games::ultimate::BoardResult;

    #[test]
    fn test_line_justifies_result() {
        let mut state = GameState::initial();
        for cell in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            state.meta.place(Position::Center, cell, Player::X);
        }
        state.meta.set_result(Position::Center, BoardResult::Won(Player::X));
        assert!(DecidedBoardsJustifiedInvariant::holds(&state));
    }

    #[test]
    fn test_unjustified_result_violates() {
        let mut state = GameState::initial();
        state.meta.set_result(Position::BottomLeft, BoardResult::Won(Player::O));
        assert!(!DecidedBoardsJustifiedInvariant::holds(&state));
    }
}
