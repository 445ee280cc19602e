//! Shared helpers for integration tests.

#![allow(dead_code)]

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use std::sync::Once;
use strictly_ultimate::{GameEngine, Move, MoveOutcome, Position};
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Installs a test-friendly subscriber; `RUST_LOG` controls verbosity.
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

/// Shorthand for building moves from indices in tests.
pub fn mv(board: usize, cell: usize) -> Move {
    Move::new(
        Position::from_index(board).expect("board index"),
        Position::from_index(cell).expect("cell index"),
    )
}

/// Seeded generator so random games replay identically.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Plays random legal moves until the game ends, returning the moves.
pub fn random_game(engine: &mut GameEngine, seed: u64) -> Vec<Move> {
    let mut rng = seeded_rng(seed);
    let mut played = Vec::new();
    loop {
        let legal = engine.legal_moves();
        let mov = *legal
            .choose(&mut rng)
            .expect("running game must have a legal move");
        played.push(mov);
        if let MoveOutcome::Finished(_) = engine.play(mov).expect("legal move accepted") {
            return played;
        }
    }
}
