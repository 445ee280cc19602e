//! Game phases and outcomes for the ultimate variant.

use super::super::grid::{Player, Position};
use serde::{Deserialize, Serialize};

/// Where the next move may be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActiveBoard {
    /// Any undecided sub-board.
    #[default]
    Any,
    /// Only this sub-board.
    Board(Position),
}

impl ActiveBoard {
    /// Returns true if a move into `board` satisfies the constraint.
    pub fn allows(self, board: Position) -> bool {
        match self {
            ActiveBoard::Any => true,
            ActiveBoard::Board(active) => active == board,
        }
    }
}

impl std::fmt::Display for ActiveBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActiveBoard::Any => write!(f, "any board"),
            ActiveBoard::Board(pos) => write!(f, "{}", pos),
        }
    }
}

/// How the super-board was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VictoryKind {
    /// Three sub-boards in a row.
    Line,
    /// Every sub-board decided, no line; most sub-boards wins.
    Majority,
}

/// Final result of a game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Victory {
    /// The winning player.
    pub winner: Player,
    /// Sub-boards to highlight: the winning line, or every board the
    /// winner owns for a majority decision.
    pub highlighted: Vec<Position>,
    /// Which rule fired.
    pub kind: VictoryKind,
}

impl std::fmt::Display for Victory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            VictoryKind::Line => write!(f, "Player {} wins with a line", self.winner),
            VictoryKind::Majority => write!(
                f,
                "Player {} wins by majority ({} boards)",
                self.winner,
                self.highlighted.len()
            ),
        }
    }
}

/// Current phase of the state machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are accepted.
    Playing {
        /// Player to move.
        to_move: Player,
        /// Constraint on the next move.
        active: ActiveBoard,
    },
    /// Game over.
    Finished(Victory),
}

/// Result of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Game continues with the next player.
    Continue,
    /// This move ended the game.
    Finished(Victory),
}
