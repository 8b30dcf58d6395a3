//! In-memory sink for testing.
//!
//! Captures everything persisted through it so tests can assert on the exact
//! text a caller produced, without touching the filesystem.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{PersistenceError, PersistenceResult};
use crate::sink::RobotsSink;

/// Sink that records persisted content.
#[derive(Clone, Default)]
pub struct MemorySink {
    /// Content of every successful persist call, oldest first.
    writes: Arc<RwLock<Vec<String>>>,
    /// Simulated failure to return instead of recording.
    simulate_failure: Arc<RwLock<Option<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following persist call fail with `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        *self.simulate_failure.write() = Some(message.into());
    }

    pub fn clear_failure(&self) {
        *self.simulate_failure.write() = None;
    }

    /// The most recently persisted content.
    pub fn last(&self) -> Option<String> {
        self.writes.read().last().cloned()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.read().clone()
    }

    pub fn write_count(&self) -> usize {
        self.writes.read().len()
    }
}

impl RobotsSink for MemorySink {
    fn persist(&self, content: &str) -> PersistenceResult<()> {
        if let Some(message) = self.simulate_failure.read().clone() {
            return Err(PersistenceError::Rejected(message));
        }
        self.writes.write().push(content.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
