//! Strictly Ultimate - ultimate tic-tac-toe as a plain library.
//!
//! The engine owns all game state; a presentation layer drives it with
//! intents and renders from an owned [`GameView`].
//!
//! # Architecture
//!
//! - **Grid**: players, squares, positions and the shared line rules
//! - **Ultimate**: meta-board, move state machine, bounded undo history
//! - **Sliding**: three-piece tic-tac-toe where pieces move once placed
//! - **Config**: engine settings loadable from TOML
//!
//! # Example
//!
//! ```
//! use strictly_ultimate::{ActiveBoard, GameEngine, Player, Position};
//!
//! let mut engine = GameEngine::new();
//! engine.apply_move(Position::TopLeft, Position::Center)?;
//!
//! assert_eq!(engine.current_player(), Player::O);
//! assert_eq!(engine.active_board(), ActiveBoard::Board(Position::Center));
//!
//! engine.undo().expect("one move to undo");
//! assert_eq!(engine.current_player(), Player::X);
//! # Ok::<(), strictly_ultimate::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig};

// Crate-level exports - Shared grid types
pub use games::grid::rules::{LINES, Line, check_winner, is_full, last_before_full, winning_line};
pub use games::grid::{Mark, Player, Position, Square, SubBoard};

// Crate-level exports - Ultimate tic-tac-toe
pub use games::ultimate::invariants::{
    ActiveBoardPlayableInvariant, DecidedBoardsJustifiedInvariant, Invariant, InvariantSet,
    InvariantViolation, MarkBalanceInvariant, UltimateInvariants,
};
pub use games::ultimate::{
    ActiveBoard, BoardIsActive, BoardResult, BoardUndecided, CellIsEmpty, Contract, GameEngine,
    GameRunning, GameState, GameView, HistoryStack, LegalMove, MetaBoard, Move, MoveContract,
    MoveError, MoveOutcome, Phase, Resolution, Snapshot, UndoError, Victory, VictoryKind,
    resolve_meta_board,
};

// Crate-level exports - Sliding variant
pub use games::sliding::{MAX_PIECES, SlideError, SlidingGame, SlidingMove};
