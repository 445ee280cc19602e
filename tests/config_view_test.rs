//! Tests for engine configuration files and the observation view.

mod common;

use common::{init_tracing, mv};
use std::io::Write;
use strictly_ultimate::{ActiveBoard, EngineConfig, GameEngine, GameView, Player, Position};

#[test]
fn test_config_from_file() {
    init_tracing();
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "history_capacity = 8").unwrap();
    writeln!(file, "pin_initial_snapshot = true").unwrap();

    let config = EngineConfig::from_file(file.path()).expect("config loads");
    assert_eq!(*config.history_capacity(), 8);
    assert!(*config.pin_initial_snapshot());

    let engine = GameEngine::with_config(config);
    assert_eq!(engine.history().capacity(), 8);
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = EngineConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_larger_capacity_allows_deeper_undo() {
    let config = EngineConfig::new(10, false).unwrap();
    let mut engine = GameEngine::with_config(config);
    for (b, c) in [(4, 4), (4, 0), (0, 4), (4, 2), (2, 4), (4, 5)] {
        engine.play(mv(b, c)).unwrap();
    }
    for _ in 0..6 {
        engine.undo().expect("within capacity");
    }
    assert_eq!(engine.view(), GameEngine::new().view());
}

#[test]
fn test_view_reports_playability() {
    let mut engine = GameEngine::new();
    engine.apply_move(Position::BottomLeft, Position::TopRight).unwrap();

    let view = engine.view();
    assert_eq!(view.current_player, Player::O);
    assert_eq!(view.active, ActiveBoard::Board(Position::TopRight));
    assert!(view.can_undo);
    assert!(view.is_playable(Position::TopRight));
    assert!(!view.is_playable(Position::Center));
    assert_eq!(
        view.square(Position::BottomLeft, Position::TopRight),
        strictly_ultimate::Square::Occupied(Player::X)
    );
}

#[test]
fn test_view_json_round_trip() {
    let mut engine = GameEngine::new();
    engine.apply_move(Position::Center, Position::Center).unwrap();
    let view = engine.view();

    let json = view.to_json().expect("serializes");
    assert!(json.contains("\"current_player\":\"O\""));
    let back: GameView = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back, view);
}
