use crate::clock::Clock;
use crate::filter::TaskFilter;
use crate::models::{normalize_category, split_tags, Priority, Task, DEFAULT_CATEGORY};
use crate::normalize::normalize_task;
use crate::storage::{Storage, CLOUD_KEY, LAST_SYNC_KEY, TASKS_KEY};
use serde_json::Value;
use thiserror::Error;

/// Errors surfaced to the user by store operations.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("task text must not be empty")]
    EmptyText,
    #[error("start date is required")]
    MissingStartDate,
    #[error("no cloud data to sync from")]
    NoCloudData,
    #[error("failed to write storage: {0}")]
    Storage(#[from] std::io::Error),
}

/// User-supplied fields for creating or editing a task. `tags` is the
/// raw comma-separated input; splitting happens in the store.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub text: String,
    pub category: String,
    pub start_date: String,
    pub due_date: String,
    pub priority: Priority,
    pub tags: String,
}

/// The task store: owns the in-memory collection, applies mutations,
/// computes derived views, and mirrors every change to the primary
/// storage slot. Newest tasks come first and insertion order is
/// preserved across reloads.
pub struct TaskStore<S: Storage, C: Clock> {
    storage: S,
    clock: C,
    tasks: Vec<Task>,
}

impl<S: Storage, C: Clock> TaskStore<S, C> {
    /// Loads the collection from the primary slot, normalizing each
    /// record. Malformed JSON is logged and treated as no saved tasks.
    pub fn load(storage: S, clock: C) -> Self {
        let tasks = match storage.read(TASKS_KEY) {
            Some(raw) => match serde_json::from_str::<Vec<Value>>(&raw) {
                Ok(records) => records.iter().map(|r| normalize_task(r, &clock)).collect(),
                Err(e) => {
                    eprintln!("Failed to parse saved tasks: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        TaskStore {
            storage,
            clock,
            tasks,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Adds a new task built from `draft` and prepends it to the
    /// collection. Returns the assigned id.
    pub fn add(&mut self, draft: TaskDraft) -> Result<u64, TaskError> {
        let text = draft.text.trim().to_string();
        if text.is_empty() {
            return Err(TaskError::EmptyText);
        }
        if draft.start_date.trim().is_empty() {
            return Err(TaskError::MissingStartDate);
        }
        let id = self.next_id();
        let task = Task {
            id,
            text,
            completed: false,
            created_at: self.clock.now().to_rfc3339(),
            start_date: draft.start_date,
            category: normalize_category(&draft.category),
            priority: draft.priority,
            due_date: draft.due_date,
            tags: split_tags(&draft.tags),
        };
        self.tasks.insert(0, task);
        self.persist()?;
        Ok(id)
    }

    /// Flips the completed flag of the matching task, touching nothing
    /// else. Returns `false` (and writes nothing) when the id is absent.
    pub fn toggle(&mut self, id: u64) -> Result<bool, TaskError> {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Replaces the editable fields of the matching task. Identity
    /// fields (`id`, `completed`, `created_at`) are preserved. Returns
    /// `false` when the id is absent.
    pub fn edit(&mut self, id: u64, draft: TaskDraft) -> Result<bool, TaskError> {
        let text = draft.text.trim().to_string();
        if text.is_empty() {
            return Err(TaskError::EmptyText);
        }
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.text = text;
                task.category = normalize_category(&draft.category);
                task.start_date = draft.start_date;
                task.due_date = draft.due_date;
                task.priority = draft.priority;
                task.tags = split_tags(&draft.tags);
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes the matching task. Returns `false` when the id is absent.
    pub fn remove(&mut self, id: u64) -> Result<bool, TaskError> {
        let len_before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == len_before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Tasks passing `filter`, in collection order.
    pub fn filtered(&self, filter: &TaskFilter) -> Vec<&Task> {
        let today = self.clock.today();
        self.tasks
            .iter()
            .filter(|t| filter.matches(t, today))
            .collect()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn pending_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    pub fn overdue_count(&self) -> usize {
        let today = self.clock.today();
        self.tasks.iter().filter(|t| t.is_overdue(today)).count()
    }

    pub fn is_overdue(&self, task: &Task) -> bool {
        task.is_overdue(self.clock.today())
    }

    /// Distinct categories in first-seen order, with "General" always
    /// present and forced first.
    pub fn category_options(&self) -> Vec<String> {
        let mut options = vec![DEFAULT_CATEGORY.to_string()];
        for task in &self.tasks {
            if !options.contains(&task.category) {
                options.push(task.category.clone());
            }
        }
        options
    }

    /// Copies the full collection to the cloud slot and records a new
    /// sync timestamp. Returns the timestamp.
    pub fn save_to_cloud(&mut self) -> Result<String, TaskError> {
        let snapshot = serde_json::to_string_pretty(&self.tasks).unwrap();
        self.storage.write(CLOUD_KEY, &snapshot)?;
        let stamp = self.clock.now().to_rfc3339();
        self.storage.write(LAST_SYNC_KEY, &stamp)?;
        Ok(stamp)
    }

    /// Replaces the in-memory collection and the primary slot with the
    /// cloud snapshot, normalizing each record. Fails without touching
    /// anything when there is no cloud data; a snapshot that fails to
    /// decode is logged and treated the same way.
    pub fn sync_from_cloud(&mut self) -> Result<usize, TaskError> {
        let raw = self.storage.read(CLOUD_KEY).ok_or(TaskError::NoCloudData)?;
        let records: Vec<Value> = match serde_json::from_str(&raw) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("Failed to parse cloud snapshot: {}", e);
                return Err(TaskError::NoCloudData);
            }
        };
        self.tasks = records
            .iter()
            .map(|r| normalize_task(r, &self.clock))
            .collect();
        self.persist()?;
        Ok(self.tasks.len())
    }

    /// Timestamp of the last cloud save, if any.
    pub fn last_sync(&self) -> Option<String> {
        self.storage.read(LAST_SYNC_KEY)
    }

    fn next_id(&self) -> u64 {
        self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    /// Rewrites the primary slot with the whole collection.
    fn persist(&mut self) -> Result<(), TaskError> {
        let serialized = serde_json::to_string_pretty(&self.tasks).unwrap();
        self.storage.write(TASKS_KEY, &serialized)?;
        Ok(())
    }
}
