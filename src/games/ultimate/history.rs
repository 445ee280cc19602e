//! Bounded snapshot history for undo.

use super::state::GameState;
use std::collections::VecDeque;
use tracing::{debug, instrument, trace};

/// A stored copy of the game state.
pub type Snapshot = GameState;

/// Stack of snapshots, most recent last, holding at most `capacity`.
#[derive(Debug, Clone)]
pub struct HistoryStack {
    snapshots: VecDeque<Snapshot>,
    capacity: usize,
    pin_floor: bool,
}

impl HistoryStack {
    /// Creates a stack seeded with `seed`.
    ///
    /// `capacity` is clamped to at least 1 (2 when pinning) so the seed
    /// always fits.
    #[instrument(skip(seed))]
    pub fn new(seed: Snapshot, capacity: usize, pin_floor: bool) -> Self {
        let capacity = if pin_floor {
            capacity.max(2)
        } else {
            capacity.max(1)
        };
        let mut snapshots = VecDeque::with_capacity(capacity + 1);
        snapshots.push_back(seed);
        Self {
            snapshots,
            capacity,
            pin_floor,
        }
    }

    /// Appends a snapshot, evicting the oldest if over capacity.
    ///
    /// With a pinned floor the bottom snapshot survives and the one
    /// above it is evicted instead.
    #[instrument(skip(self, snapshot), fields(len = self.snapshots.len()))]
    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push_back(snapshot);
        if self.snapshots.len() > self.capacity {
            let evict_at = usize::from(self.pin_floor);
            self.snapshots.remove(evict_at);
            trace!(evict_at, "Evicted oldest snapshot");
        }
    }

    /// Drops the top snapshot and returns the new top.
    ///
    /// Returns `None` without touching the stack when only one
    /// snapshot remains.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.snapshots.len() <= 1 {
            debug!("Undo at history floor");
            return None;
        }
        self.snapshots.pop_back();
        self.snapshots.back()
    }

    /// Clears the stack and seeds it with `seed`.
    #[instrument(skip(self, seed))]
    pub fn reset(&mut self, seed: Snapshot) {
        self.snapshots.clear();
        self.snapshots.push_back(seed);
    }

    /// The most recent snapshot.
    pub fn top(&self) -> Option<&Snapshot> {
        self.snapshots.back()
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// True when no snapshots are stored.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// True when `undo` would revert something.
    pub fn can_undo(&self) -> bool {
        self.snapshots.len() > 1
    }

    /// Maximum number of stored snapshots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates snapshots from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter()
    }
}
