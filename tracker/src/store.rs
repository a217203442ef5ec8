//! The task collection and its operations.
//!
//! `TaskStore` is plain owned data: it is held inside the container state
//! and mutated only through the reducer. Operations on an id that is not in
//! the collection are silent no-ops; their return value tells the caller
//! whether anything happened.

use crate::types::{Task, TaskDraft, TaskId, TaskPatch};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ordered collection of tasks, in insertion order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Creates an empty store
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Append a new task built from `draft`
    ///
    /// The caller supplies a fresh `id`; both timestamps are set to `now`.
    pub fn create(&mut self, draft: TaskDraft, id: TaskId, now: DateTime<Utc>) -> &Task {
        debug_assert!(!self.contains(&id), "task id {id} issued twice");
        self.tasks.push(Task::from_draft(id, draft, now));
        &self.tasks[self.tasks.len() - 1]
    }

    /// Remove a task, returning it if it was present
    pub fn delete(&mut self, id: &TaskId) -> Option<Task> {
        let index = self.position(id)?;
        Some(self.tasks.remove(index))
    }

    /// Flip `completed` on a task and return the new value
    ///
    /// Nothing else changes: `status` and `updated_at` stay as they were.
    pub fn toggle_complete(&mut self, id: &TaskId) -> Option<bool> {
        let task = self.get_mut(id)?;
        task.completed = !task.completed;
        Some(task.completed)
    }

    /// Apply a partial update and advance `updated_at`
    pub fn update(&mut self, id: &TaskId, patch: TaskPatch, now: DateTime<Utc>) -> Option<&Task> {
        let task = self.get_mut(id)?;
        task.apply(patch, now);
        Some(task)
    }

    /// All tasks in insertion order
    #[must_use]
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns a task by id
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == *id)
    }

    /// Checks if a task exists
    #[must_use]
    pub fn contains(&self, id: &TaskId) -> bool {
        self.position(id).is_some()
    }

    /// Returns the number of tasks
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store holds no tasks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the number of completed tasks
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == *id)
    }

    fn get_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id == *id)
    }
}
