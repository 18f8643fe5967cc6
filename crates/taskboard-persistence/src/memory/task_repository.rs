//! In-memory task repository implementation

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

use taskboard_domain::{
    errors::DomainResult, repositories::TaskRepository, Task, TaskId,
};

/// In-memory TaskRepository backed by a `RwLock<HashMap>`
///
/// Reads take the shared lock and hand out owned clones, so callers
/// never observe a task mutated behind their back.
#[derive(Debug, Default)]
pub struct InMemoryTaskRepository {
    tasks: RwLock<HashMap<TaskId, Task>>,
}

impl InMemoryTaskRepository {
    /// Create a new empty in-memory task repository
    pub fn new() -> Self {
        Self {
            tasks: RwLock::new(HashMap::new()),
        }
    }

    /// Create with initial tasks (useful for testing)
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let map: HashMap<TaskId, Task> = tasks.into_iter().map(|t| (*t.id(), t)).collect();
        Self {
            tasks: RwLock::new(map),
        }
    }

    /// Get the current count of tasks (for testing)
    pub fn count(&self) -> usize {
        self.tasks.read().len()
    }

    /// Clear all tasks (for testing)
    pub fn clear(&self) {
        self.tasks.write().clear();
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn save(&self, task: &Task) -> DomainResult<()> {
        let mut tasks = self.tasks.write();
        tasks.insert(*task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &TaskId) -> DomainResult<Option<Task>> {
        let tasks = self.tasks.read();
        Ok(tasks.get(id).cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<Task>> {
        let tasks = self.tasks.read();
        Ok(tasks.values().cloned().collect())
    }

    async fn delete(&self, id: &TaskId) -> DomainResult<()> {
        let mut tasks = self.tasks.write();
        tasks.remove(id);
        Ok(())
    }

    async fn exists(&self, id: &TaskId) -> DomainResult<bool> {
        let tasks = self.tasks.read();
        Ok(tasks.contains_key(id))
    }
}
