//! Ultimate tic-tac-toe: nine sub-boards on a meta-board.

mod action;
mod contracts;
mod engine;
mod history;
pub mod invariants;
mod meta;
mod phases;
mod state;
mod view;

pub use action::{Move, MoveError, UndoError};
pub use contracts::{
    BoardIsActive, BoardUndecided, CellIsEmpty, Contract, GameRunning, LegalMove, MoveContract,
};
pub use engine::GameEngine;
pub use history::{HistoryStack, Snapshot};
pub use meta::{BoardResult, MetaBoard, Resolution, resolve_meta_board};
pub use phases::{ActiveBoard, MoveOutcome, Phase, Victory, VictoryKind};
pub use state::GameState;
pub use view::GameView;
