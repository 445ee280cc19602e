//! Game engine for three-piece sliding tic-tac-toe.

use super::super::grid::rules::{Line, winning_line};
use super::super::grid::{Player, Position, Square, SubBoard};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Pieces each player may have on the board.
pub const MAX_PIECES: usize = 3;

/// A turn in the sliding variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlidingMove {
    /// Put a new piece on an empty square.
    Place(Position),
    /// Move one of the mover's pieces to an empty square.
    Relocate {
        /// Square currently holding the piece.
        from: Position,
        /// Empty destination.
        to: Position,
    },
}

/// Error that can occur when applying a sliding move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SlideError {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The destination is not empty.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The source square does not hold the mover's piece.
    #[display("Square {} does not hold your piece", _0)]
    NotYourPiece(Position),

    /// All pieces are placed; the mover must relocate one.
    #[display("All {} pieces are placed; move one instead", MAX_PIECES)]
    MustRelocate,

    /// The mover still has pieces to place.
    #[display("Place all {} pieces before moving one", MAX_PIECES)]
    MustPlace,
}

impl std::error::Error for SlideError {}

/// Three-piece sliding tic-tac-toe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlidingGame {
    board: SubBoard,
    current_player: Player,
    running: bool,
    winner: Option<Player>,
    forfeited: bool,
    history: Vec<SlidingMove>,
}

impl SlidingGame {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: SubBoard::new(),
            current_player: Player::X,
            running: true,
            winner: None,
            forfeited: false,
            history: Vec::new(),
        }
    }

    /// Places a new piece for the current player.
    ///
    /// # Errors
    ///
    /// Fails if the game is over, the mover already has three pieces, or
    /// the square is taken.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn place(&mut self, pos: Position) -> Result<(), SlideError> {
        self.play(SlidingMove::Place(pos))
    }

    /// Moves one of the current player's pieces.
    ///
    /// # Errors
    ///
    /// Fails if the game is over, the mover still has pieces to place,
    /// `from` is not theirs, or `to` is taken.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn relocate(&mut self, from: Position, to: Position) -> Result<(), SlideError> {
        self.play(SlidingMove::Relocate { from, to })
    }

    /// Applies a [`SlidingMove`].
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play(&mut self, mov: SlidingMove) -> Result<(), SlideError> {
        self.validate(mov)?;

        let player = self.current_player;
        match mov {
            SlidingMove::Place(pos) => {
                self.board.set(pos, Square::Occupied(player));
            }
            SlidingMove::Relocate { from, to } => {
                self.board.set(from, Square::Empty);
                self.board.set(to, Square::Occupied(player));
            }
        }
        self.history.push(mov);

        if self.winning_line().is_some() {
            info!(winner = %player, "Sliding game won");
            self.running = false;
            self.winner = Some(player);
        } else {
            self.current_player = player.opponent();
            debug!(next = %self.current_player, "Turn passed");
        }
        Ok(())
    }

    fn validate(&self, mov: SlidingMove) -> Result<(), SlideError> {
        if !self.running {
            return Err(SlideError::GameOver);
        }

        let all_placed = self.pieces_placed(self.current_player) >= MAX_PIECES;
        match mov {
            SlidingMove::Place(_) if all_placed => Err(SlideError::MustRelocate),
            SlidingMove::Place(pos) if !self.board.is_empty(pos) => {
                Err(SlideError::SquareOccupied(pos))
            }
            SlidingMove::Place(_) => Ok(()),
            SlidingMove::Relocate { .. } if !all_placed => Err(SlideError::MustPlace),
            SlidingMove::Relocate { from, .. }
                if self.board.get(from) != Square::Occupied(self.current_player) =>
            {
                Err(SlideError::NotYourPiece(from))
            }
            SlidingMove::Relocate { to, .. } if !self.board.is_empty(to) => {
                Err(SlideError::SquareOccupied(to))
            }
            SlidingMove::Relocate { .. } => Ok(()),
        }
    }

    /// Ends the game against the player to move.
    ///
    /// The caller owns the clock and fires this when the mover's time
    /// runs out.
    ///
    /// # Errors
    ///
    /// Returns [`SlideError::GameOver`] if the game already ended.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn forfeit(&mut self) -> Result<(), SlideError> {
        if !self.running {
            return Err(SlideError::GameOver);
        }
        let winner = self.current_player.opponent();
        info!(loser = %self.current_player, %winner, "Player forfeited");
        self.running = false;
        self.winner = Some(winner);
        self.forfeited = true;
        Ok(())
    }

    /// Resets to an empty board with X to move.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    /// Returns the board.
    pub fn board(&self) -> &SubBoard {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns true while moves are accepted.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns true if the game ended by forfeit.
    pub fn is_forfeit(&self) -> bool {
        self.forfeited
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[SlidingMove] {
        &self.history
    }

    /// Number of pieces `player` has on the board.
    pub fn pieces_placed(&self, player: Player) -> usize {
        self.board.count(player)
    }

    /// The completed line, if any.
    pub fn winning_line(&self) -> Option<Line> {
        winning_line(self.board.squares().map(|s| s.player()))
    }

    /// Squares holding the current player's pieces, when relocation is due.
    pub fn movable_pieces(&self) -> Vec<Position> {
        if !self.running || self.pieces_placed(self.current_player) < MAX_PIECES {
            return Vec::new();
        }
        Position::ALL
            .into_iter()
            .filter(|pos| self.board.get(*pos) == Square::Occupied(self.current_player))
            .collect()
    }

    /// Empty squares.
    pub fn empty_squares(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| self.board.is_empty(*pos))
            .collect()
    }
}

impl Default for SlidingGame {
    fn default() -> Self {
        Self::new()
    }
}
