//! In-memory task repository.

use crate::task::domain::{Task, TaskCode};
use crate::task::ports::TaskRepository;
use std::sync::{Arc, RwLock};
use tracing::warn;

/// Thread-safe in-memory task repository.
///
/// Records keep insertion order so lookups observe the same first-match
/// semantics as the flat-file adapter.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<Vec<Task>>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository seeded with tasks in order.
    #[must_use]
    pub fn with_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        Self {
            state: Arc::new(RwLock::new(tasks.into_iter().collect())),
        }
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn find_all(&self) -> Vec<Task> {
        self.state.read().map_or_else(
            |_| {
                warn!("task state lock poisoned; treating store as empty");
                Vec::new()
            },
            |tasks| tasks.clone(),
        )
    }

    fn find_by_code(&self, code: TaskCode) -> Option<Task> {
        self.find_all()
            .into_iter()
            .find(|task| task.code() == code)
    }

    fn save(&self, task: &Task) {
        match self.state.write() {
            Ok(mut tasks) => tasks.push(task.clone()),
            Err(_) => warn!("task state lock poisoned; dropping save"),
        }
    }

    fn update(&self, task: &Task) {
        match self.state.write() {
            Ok(mut tasks) => {
                if let Some(slot) = tasks.iter_mut().find(|existing| existing.code() == task.code())
                {
                    *slot = task.clone();
                }
            }
            Err(_) => warn!("task state lock poisoned; dropping update"),
        }
    }

    fn delete(&self, code: TaskCode) {
        match self.state.write() {
            Ok(mut tasks) => tasks.retain(|task| task.code() != code),
            Err(_) => warn!("task state lock poisoned; dropping delete"),
        }
    }
}
