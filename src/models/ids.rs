use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier shared by users, recipes and reports
///
/// Serialized as a bare JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of fresh entity ids
pub trait IdGenerator: Send {
    fn next_id(&mut self) -> EntityId;

    /// Record an id already in use; later ids are issued above it
    fn observe(&mut self, existing: EntityId);
}

/// Random ids below this bound are mixed into every timestamp id
const RANDOM_SPAN: u64 = 1000;

/// Time-based ids with a random low component
///
/// `epoch_millis * 1000 + random(0..1000)`, strictly increasing within one
/// generator. Values stay below 2^53 so they survive JavaScript numbers.
#[derive(Debug, Default)]
pub struct TimestampIdGenerator {
    last: u64,
}

impl TimestampIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    fn candidate() -> u64 {
        let millis = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
        let jitter = rand::thread_rng().gen_range(0..RANDOM_SPAN);
        millis.saturating_mul(RANDOM_SPAN).saturating_add(jitter)
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&mut self) -> EntityId {
        let candidate = Self::candidate();
        let id = if candidate > self.last {
            candidate
        } else {
            self.last + 1
        };
        self.last = id;
        EntityId(id)
    }

    fn observe(&mut self, existing: EntityId) {
        self.last = self.last.max(existing.0);
    }
}

/// Counter ids: `start`, `start + 1`, ...
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    pub fn starting_at(start: u64) -> Self {
        Self { next: start }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> EntityId {
        let id = self.next;
        self.next += 1;
        EntityId(id)
    }

    fn observe(&mut self, existing: EntityId) {
        self.next = self.next.max(existing.0.saturating_add(1));
    }
}
