//! Tests for the three-piece sliding variant.

mod common;

use common::init_tracing;
use strictly_ultimate::{MAX_PIECES, Player, Position, SlideError, SlidingGame, SlidingMove};

#[test]
fn test_full_game_by_relocation() {
    init_tracing();
    let mut game = SlidingGame::new();
    let moves = [
        SlidingMove::Place(Position::Center),       // X
        SlidingMove::Place(Position::TopLeft),      // O
        SlidingMove::Place(Position::TopRight),     // X
        SlidingMove::Place(Position::BottomLeft),   // O
        SlidingMove::Place(Position::MiddleLeft),   // X
        SlidingMove::Place(Position::MiddleRight),  // O
        SlidingMove::Relocate {
            from: Position::MiddleLeft,
            to: Position::BottomCenter,
        }, // X
        SlidingMove::Relocate {
            from: Position::MiddleRight,
            to: Position::MiddleLeft,
        }, // O: TopLeft, MiddleLeft, BottomLeft
    ];
    for mov in moves {
        game.play(mov).expect("legal move");
    }

    assert_eq!(game.winner(), Some(Player::O));
    assert!(!game.is_forfeit());
    let line = game.winning_line().expect("winning line");
    assert_eq!(
        line.positions,
        [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]
    );
    assert_eq!(game.history().len(), moves.len());
    assert_eq!(game.pieces_placed(Player::X), MAX_PIECES);
}

#[test]
fn test_placement_win_before_relocation() {
    let mut game = SlidingGame::new();
    for pos in [
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::BottomLeft,
        Position::TopRight,
    ] {
        game.place(pos).expect("placement");
    }
    assert_eq!(game.winner(), Some(Player::X));
    assert!(game.movable_pieces().is_empty());
    assert_eq!(game.relocate(Position::TopLeft, Position::MiddleLeft), Err(SlideError::GameOver));
}

#[test]
fn test_forfeit_is_the_timeout_rule() {
    let mut game = SlidingGame::new();
    game.place(Position::Center).unwrap();
    // O's clock runs out.
    game.forfeit().unwrap();
    assert_eq!(game.winner(), Some(Player::X));
    assert!(game.is_forfeit());
    assert_eq!(game.place(Position::TopLeft), Err(SlideError::GameOver));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        SlideError::MustRelocate.to_string(),
        "All 3 pieces are placed; move one instead"
    );
    assert_eq!(
        SlideError::NotYourPiece(Position::Center).to_string(),
        "Square Center does not hold your piece"
    );
}
