//! Game engine for ultimate tic-tac-toe.
//!
//! The engine owns all mutable game state. Callers drive it with three
//! intents (`apply_move`, `undo`, `restart`) and read it through
//! accessors or an owned [`GameView`].

use super::super::grid::{Player, Position};
use super::action::{Move, MoveError, UndoError};
use super::contracts::{Contract, MoveContract};
use super::history::HistoryStack;
use super::meta::MetaBoard;
use super::phases::{ActiveBoard, MoveOutcome, Phase, Victory};
use super::state::GameState;
use super::view::GameView;
use crate::config::EngineConfig;
use tracing::{debug, info, instrument};

/// Ultimate tic-tac-toe engine.
#[derive(Debug, Clone)]
pub struct GameEngine {
    state: GameState,
    history: HistoryStack,
    config: EngineConfig,
}

impl GameEngine {
    /// Creates a new game with the default configuration.
    #[instrument]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates a new game with the given configuration.
    #[instrument]
    pub fn with_config(config: EngineConfig) -> Self {
        let state = GameState::initial();
        let history = HistoryStack::new(
            state.clone(),
            *config.history_capacity(),
            *config.pin_initial_snapshot(),
        );
        Self {
            state,
            history,
            config,
        }
    }

    /// Replays `moves` on a fresh engine.
    ///
    /// # Errors
    ///
    /// Returns the first rejection; moves after it are not attempted.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(config: EngineConfig, moves: &[Move]) -> Result<Self, MoveError> {
        let mut engine = Self::with_config(config);
        for mov in moves {
            engine.play(*mov)?;
        }
        Ok(engine)
    }

    // ─────────────────────────────────────────────────────────
    //  Intents
    // ─────────────────────────────────────────────────────────

    /// Plays the current player's mark at `cell` of sub-board `board`.
    ///
    /// # Errors
    ///
    /// Rejects the move, leaving every piece of state untouched, when the
    /// game is over, the sub-board is decided, the sub-board is not
    /// active, or the cell is occupied (checked in that order).
    pub fn apply_move(&mut self, board: Position, cell: Position) -> Result<MoveOutcome, MoveError> {
        self.play(Move::new(board, cell))
    }

    /// Like [`apply_move`](Self::apply_move), taking raw 0-8 indices.
    #[instrument(skip(self))]
    pub fn apply_move_at(&mut self, board: usize, cell: usize) -> Result<MoveOutcome, MoveError> {
        self.play(Move::from_indices(board, cell)?)
    }

    /// Applies a [`Move`].
    #[instrument(skip(self), fields(player = %self.state.current_player))]
    pub fn play(&mut self, mov: Move) -> Result<MoveOutcome, MoveError> {
        if let Err(e) = MoveContract::pre(&self.state, &mov) {
            debug!(error = %e, "Move rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        let player = self.state.current_player;
        self.state.meta.place(mov.board, mov.cell, player);
        self.state.last_move = Some(mov);

        let resolution = self.state.meta.resolve_sub_board(mov.board, player);
        let victory = if resolution.newly_decided {
            self.state.meta.resolve()
        } else {
            None
        };

        let outcome = match victory {
            Some(victory) => {
                info!(winner = %victory.winner, kind = ?victory.kind, "Game finished");
                self.state.running = false;
                self.state.winner = Some(victory.clone());
                MoveOutcome::Finished(victory)
            }
            None => {
                self.state.active = if self.state.meta.result(mov.cell).is_undecided() {
                    ActiveBoard::Board(mov.cell)
                } else {
                    ActiveBoard::Any
                };
                self.state.current_player = player.opponent();
                debug!(next = %self.state.current_player, active = %self.state.active, "Move accepted");
                MoveOutcome::Continue
            }
        };

        #[cfg(debug_assertions)]
        self.verify_transition(before)?;

        self.history.push(self.state.clone());
        Ok(outcome)
    }

    /// Checks postconditions, rolling back to `before` on failure.
    #[cfg(debug_assertions)]
    fn verify_transition(&mut self, before: GameState) -> Result<(), MoveError> {
        if let Err(e) = MoveContract::post(&before, &self.state) {
            tracing::error!(error = %e, "Postcondition failed; rolling back");
            self.state = before;
            return Err(e);
        }
        Ok(())
    }

    /// Reverts the most recent accepted move.
    ///
    /// # Errors
    ///
    /// Returns [`UndoError::HistoryExhausted`] when only the floor
    /// snapshot remains; nothing changes.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<(), UndoError> {
        match self.history.undo() {
            Some(snapshot) => {
                self.state = snapshot.clone();
                debug!(to_move = %self.state.current_player, "Undid one move");
                Ok(())
            }
            None => Err(UndoError::HistoryExhausted),
        }
    }

    /// Starts over: empty board, X to move, history reseeded.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.state = GameState::initial();
        self.history.reset(self.state.clone());
        info!("Game restarted");
    }

    // ─────────────────────────────────────────────────────────
    //  Observation
    // ─────────────────────────────────────────────────────────

    /// Returns the live game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the meta-board.
    pub fn meta(&self) -> &MetaBoard {
        &self.state.meta
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.state.current_player
    }

    /// Returns the active sub-board constraint.
    pub fn active_board(&self) -> ActiveBoard {
        self.state.active
    }

    /// Returns true while moves are accepted.
    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Returns the winner once the game is finished.
    pub fn winner(&self) -> Option<&Victory> {
        self.state.winner.as_ref()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Returns true when `undo` would revert a move.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Returns the history stack.
    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    /// Returns the configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Sub-boards the current player may play in.
    #[instrument(skip(self))]
    pub fn playable_boards(&self) -> Vec<Position> {
        if !self.state.running {
            return Vec::new();
        }
        Position::ALL
            .into_iter()
            .filter(|b| self.state.meta.result(*b).is_undecided() && self.state.active.allows(*b))
            .collect()
    }

    /// Every move `apply_move` would accept right now.
    #[instrument(skip(self))]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.playable_boards()
            .into_iter()
            .flat_map(|board| {
                let sub = self.state.meta.board(board);
                Position::ALL
                    .into_iter()
                    .filter(|cell| sub.is_empty(*cell))
                    .map(move |cell| Move::new(board, cell))
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    /// Builds an owned view of the current state.
    #[instrument(skip(self))]
    pub fn view(&self) -> GameView {
        GameView {
            boards: self.state.meta.boards().map(|b| *b.squares()),
            results: *self.state.meta.results(),
            current_player: self.state.current_player,
            active: self.state.active,
            running: self.state.running,
            winner: self.state.winner.clone(),
            can_undo: self.history.can_undo(),
            last_move: self.state.last_move,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.state.meta)?;
        match self.phase() {
            Phase::Playing { to_move, active } => write!(f, "{} to move in {}", to_move, active),
            Phase::Finished(victory) => write!(f, "{}", victory),
        }
    }
}
