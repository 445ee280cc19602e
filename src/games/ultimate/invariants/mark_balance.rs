//! Mark balance invariant: players alternate, X first.

use super::super::super::grid::Player;
use super::super::state::GameState;
use super::Invariant;

/// Invariant: X has as many marks as O, or exactly one more.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.meta.count(Player::X);
        let o = state.meta.count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}
