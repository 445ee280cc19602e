//! Complete game state for the ultimate variant.

use super::super::grid::Player;
use super::action::Move;
use super::meta::MetaBoard;
use super::phases::{ActiveBoard, Phase, Victory};
use serde::{Deserialize, Serialize};

/// Complete game state.
///
/// Every field is an owned value, so a clone is a fully independent
/// snapshot: mutating the live state never reaches a stored copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Board contents and sub-board results.
    pub meta: MetaBoard,
    /// Player to move.
    pub current_player: Player,
    /// Constraint on the next move.
    pub active: ActiveBoard,
    /// False once the game is finished.
    pub running: bool,
    /// Set once the game is finished.
    pub winner: Option<Victory>,
    /// The move that produced this state, if any.
    pub last_move: Option<Move>,
}

impl GameState {
    /// The state of a fresh game: empty board, X to move, any board.
    pub fn initial() -> Self {
        Self {
            meta: MetaBoard::new(),
            current_player: Player::X,
            active: ActiveBoard::Any,
            running: true,
            winner: None,
            last_move: None,
        }
    }

    /// Current phase of the state machine.
    pub fn phase(&self) -> Phase {
        match &self.winner {
            Some(victory) if !self.running => Phase::Finished(victory.clone()),
            _ => Phase::Playing {
                to_move: self.current_player,
                active: self.active,
            },
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
