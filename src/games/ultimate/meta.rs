//! The meta-board: nine sub-boards and their cached results.

use super::super::grid::rules::{last_before_full, winning_line};
use super::super::grid::{Player, Position, Square, SubBoard};
use super::phases::{Victory, VictoryKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Result of one sub-board.
///
/// Once a sub-board is decided its result never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BoardResult {
    /// Still open for play.
    #[default]
    Undecided,
    /// Won by a player.
    Won(Player),
}

impl BoardResult {
    /// Returns the owner of a decided board.
    pub fn winner(self) -> Option<Player> {
        match self {
            BoardResult::Undecided => None,
            BoardResult::Won(player) => Some(player),
        }
    }

    /// Returns true while the board is still open.
    pub fn is_undecided(self) -> bool {
        self == BoardResult::Undecided
    }
}

/// What happened when a sub-board was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// The sub-board's result after resolution.
    pub result: BoardResult,
    /// True only on the call that moved the board out of `Undecided`.
    pub newly_decided: bool,
}

/// Nine sub-boards plus a finished-result slot for each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MetaBoard {
    boards: [SubBoard; 9],
    results: [BoardResult; 9],
}

impl MetaBoard {
    /// Creates an empty meta-board with every sub-board undecided.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a sub-board.
    pub fn board(&self, board: Position) -> &SubBoard {
        &self.boards[board.to_index()]
    }

    /// Returns all sub-boards.
    pub fn boards(&self) -> &[SubBoard; 9] {
        &self.boards
    }

    /// Returns the cached result of a sub-board.
    pub fn result(&self, board: Position) -> BoardResult {
        self.results[board.to_index()]
    }

    /// Returns all sub-board results.
    pub fn results(&self) -> &[BoardResult; 9] {
        &self.results
    }

    /// Returns the square at `cell` inside sub-board `board`.
    pub fn square(&self, board: Position, cell: Position) -> Square {
        self.boards[board.to_index()].get(cell)
    }

    /// Writes a mark. Validation is the caller's job.
    pub(super) fn place(&mut self, board: Position, cell: Position, player: Player) {
        self.boards[board.to_index()].set(cell, Square::Occupied(player));
    }

    /// Counts the marks `player` has on the whole meta-board.
    pub fn count(&self, player: Player) -> usize {
        self.boards.iter().map(|b| b.count(player)).sum()
    }

    /// Resolves a sub-board after `just_played` moved in it.
    ///
    /// A line wins first; a full board without a line goes to the opponent
    /// of `just_played`. An already-decided board is left untouched.
    #[instrument(skip(self))]
    pub fn resolve_sub_board(&mut self, board: Position, just_played: Player) -> Resolution {
        let cached = self.result(board);
        if !cached.is_undecided() {
            return Resolution {
                result: cached,
                newly_decided: false,
            };
        }

        match last_before_full(self.board(board), just_played) {
            Some(winner) => {
                debug!(%board, %winner, "Sub-board decided");
                self.results[board.to_index()] = BoardResult::Won(winner);
                Resolution {
                    result: BoardResult::Won(winner),
                    newly_decided: true,
                }
            }
            None => Resolution {
                result: BoardResult::Undecided,
                newly_decided: false,
            },
        }
    }

    /// Resolves the super-board from the current sub-board results.
    pub fn resolve(&self) -> Option<Victory> {
        resolve_meta_board(&self.results)
    }

    #[cfg(test)]
    pub(crate) fn set_result(&mut self, board: Position, result: BoardResult) {
        self.results[board.to_index()] = result;
    }
}

/// Decides the super-board from the nine sub-board results.
///
/// A line of three equal results wins and highlights that line. Failing
/// that, the game is only decided once every sub-board is; then the player
/// owning more sub-boards wins and all of their boards are highlighted.
#[instrument]
pub fn resolve_meta_board(results: &[BoardResult; 9]) -> Option<Victory> {
    if let Some(line) = winning_line(results.map(BoardResult::winner)) {
        return Some(Victory {
            winner: line.player,
            highlighted: line.positions.to_vec(),
            kind: VictoryKind::Line,
        });
    }

    if results.iter().any(|r| r.is_undecided()) {
        return None;
    }

    let owned = |player: Player| -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| results[pos.to_index()] == BoardResult::Won(player))
            .collect()
    };
    let x_boards = owned(Player::X);
    let o_boards = owned(Player::O);

    let (winner, highlighted) = if x_boards.len() > o_boards.len() {
        (Player::X, x_boards)
    } else {
        (Player::O, o_boards)
    };

    debug!(%winner, boards = highlighted.len(), "Meta-board decided by majority");
    Some(Victory {
        winner,
        highlighted,
        kind: VictoryKind::Majority,
    })
}

impl std::fmt::Display for MetaBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (band, boards) in self.boards.chunks_exact(3).enumerate() {
            if band > 0 {
                writeln!(f, "---+---+---")?;
            }
            let rows: Vec<[String; 3]> = boards.iter().map(SubBoard::rows).collect();
            for row in 0..3 {
                let line = rows
                    .iter()
                    .map(|r| r[row].as_str())
                    .collect::<Vec<_>>()
                    .join("|");
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Player::{O, X};

    fn results_of(owners: [Option<Player>; 9]) -> [BoardResult; 9] {
        owners.map(|o| o.map_or(BoardResult::Undecided, BoardResult::Won))
    }

    #[test]
    fn test_resolve_partial_board_stays_undecided() {
        let mut meta = MetaBoard::new();
        meta.place(Position::Center, Position::TopLeft, X);
        let res = meta.resolve_sub_board(Position::Center, X);
        assert_eq!(res.result, BoardResult::Undecided);
        assert!(!res.newly_decided);
    }

    #[test]
    fn test_resolve_line_then_idempotent() {
        let mut meta = MetaBoard::new();
        for cell in [Position::TopLeft, Position::Center, Position::BottomRight] {
            meta.place(Position::TopLeft, cell, O);
        }

        let first = meta.resolve_sub_board(Position::TopLeft, O);
        assert_eq!(first.result, BoardResult::Won(O));
        assert!(first.newly_decided);

        let again = meta.resolve_sub_board(Position::TopLeft, X);
        assert_eq!(again.result, BoardResult::Won(O));
        assert!(!again.newly_decided);
    }

    #[test]
    fn test_resolve_full_board_awards_non_mover() {
        let mut meta = MetaBoard::new();
        let marks = [X, O, X, O, X, O, O, X, O];
        for (cell, player) in Position::ALL.into_iter().zip(marks) {
            meta.place(Position::Center, cell, player);
        }
        let res = meta.resolve_sub_board(Position::Center, O);
        assert_eq!(res.result, BoardResult::Won(X));
    }

    #[test]
    fn test_meta_line_highlights_line() {
        let results = results_of([Some(X), None, None, None, Some(X), None, None, None, Some(X)]);
        let victory = resolve_meta_board(&results).expect("diagonal");
        assert_eq!(victory.winner, X);
        assert_eq!(victory.kind, VictoryKind::Line);
        assert_eq!(
            victory.highlighted,
            vec![Position::TopLeft, Position::Center, Position::BottomRight]
        );
    }

    #[test]
    fn test_meta_undecided_without_line() {
        let results = results_of([Some(X), Some(O), None, None, None, None, None, None, None]);
        assert_eq!(resolve_meta_board(&results), None);
    }

    #[test]
    fn test_meta_majority_when_all_decided() {
        // X O X / X O O / O X X -- no line, X owns five.
        let results = results_of([
            Some(X),
            Some(O),
            Some(X),
            Some(X),
            Some(O),
            Some(O),
            Some(O),
            Some(X),
            Some(X),
        ]);
        let victory = resolve_meta_board(&results).expect("majority");
        assert_eq!(victory.winner, X);
        assert_eq!(victory.kind, VictoryKind::Majority);
        assert_eq!(
            victory.highlighted,
            vec![
                Position::TopLeft,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomCenter,
                Position::BottomRight,
            ]
        );
    }

    #[test]
    fn test_display_lays_out_bands() {
        let mut meta = MetaBoard::new();
        meta.place(Position::TopRight, Position::BottomRight, X);
        let text = meta.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[2], "...|...|..X");
    }
}
