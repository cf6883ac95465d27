//! In-memory status-change log repository.

use crate::task::domain::{StatusChange, TaskCode};
use crate::task::ports::StatusLogRepository;
use std::sync::{Arc, RwLock};
use tracing::warn;

/// Thread-safe in-memory status-log repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStatusLogRepository {
    state: Arc<RwLock<Vec<StatusChange>>>,
}

impl InMemoryStatusLogRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every recorded entry in append order.
    #[must_use]
    pub fn entries(&self) -> Vec<StatusChange> {
        self.state.read().map_or_else(
            |_| {
                warn!("log state lock poisoned; treating store as empty");
                Vec::new()
            },
            |entries| entries.clone(),
        )
    }
}

impl StatusLogRepository for InMemoryStatusLogRepository {
    fn save(&self, entry: &StatusChange) {
        match self.state.write() {
            Ok(mut entries) => entries.push(*entry),
            Err(_) => warn!("log state lock poisoned; dropping save"),
        }
    }

    fn delete_by_task_code(&self, code: TaskCode) {
        match self.state.write() {
            Ok(mut entries) => entries.retain(|entry| entry.task_code() != code),
            Err(_) => warn!("log state lock poisoned; dropping delete"),
        }
    }
}
