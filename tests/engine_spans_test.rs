//! Tests for the tracing spans the engine opens per move.

use std::sync::{Arc, Mutex};
use strictly_ultimate::{GameEngine, Position};
use tracing::span::{Attributes, Id};
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Records the name of every span created.
#[derive(Clone, Default)]
struct SpanNames(Arc<Mutex<Vec<&'static str>>>);

impl<S: Subscriber> Layer<S> for SpanNames {
    fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
        self.0.lock().unwrap().push(attrs.metadata().name());
    }
}

#[test]
fn test_typed_move_opens_one_move_span() {
    let names = SpanNames::default();
    let subscriber = tracing_subscriber::registry().with(names.clone());

    tracing::subscriber::with_default(subscriber, || {
        let mut engine = GameEngine::new();
        engine
            .apply_move(Position::Center, Position::TopLeft)
            .expect("legal opening");
    });

    let names = names.0.lock().unwrap();
    assert_eq!(names.iter().filter(|n| **n == "play").count(), 1);
    assert_eq!(names.iter().filter(|n| **n == "apply_move").count(), 0);
}
