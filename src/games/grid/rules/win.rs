//! Line detection for 3x3 grids.

use super::super::{Player, Position, SubBoard};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
///
/// Rows top to bottom, columns left to right, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line of three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    /// Owner of all three positions.
    pub player: Player,
    /// The positions forming the line.
    pub positions: [Position; 3],
}

/// Finds the first completed line in a grid of owners.
///
/// Works on anything that can be viewed as nine optional owners, which
/// lets the meta-board reuse it over sub-board results.
#[instrument(level = "trace")]
pub fn winning_line(owners: [Option<Player>; 9]) -> Option<Line> {
    for positions in LINES {
        let [a, b, c] = positions;
        if let Some(player) = owners[a.to_index()]
            && owners[b.to_index()] == Some(player)
            && owners[c.to_index()] == Some(player)
        {
            return Some(Line { player, positions });
        }
    }

    None
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(level = "trace")]
pub fn check_winner(board: &SubBoard) -> Option<Player> {
    winning_line(board.squares().map(|s| s.player())).map(|line| line.player)
}
