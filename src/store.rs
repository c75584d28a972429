//! In-memory mock stores with simulated latency.
//!
//! The stores own the session's task and category collections for the
//! process lifetime. Every operation awaits a simulated delay *before*
//! touching the collection, so each call reads or mutates atomically once
//! its delay elapses. Concurrent calls resolve in the order their delays
//! elapse, not the order they were issued; callers must not assume FIFO
//! ordering across in-flight operations.

use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use tokio::sync::Mutex;
use tracing::debug;
use ulid::Ulid;

use crate::category::Category;
use crate::error::{Error, Result};
use crate::task::{normalized_title, Status, Task, TaskDraft, TaskPatch};

/// Default simulated delay range, mirroring a small remote API.
pub const DEFAULT_MIN_DELAY_MS: u64 = 200;
pub const DEFAULT_MAX_DELAY_MS: u64 = 500;

/// Injectable artificial delay applied to every store operation.
///
/// The delay has no semantic effect; it exists so drivers exercise their
/// loading states. `Latency::none()` keeps operations asynchronous but
/// resolves them without sleeping.
#[derive(Debug, Clone, Copy)]
pub struct Latency {
    delay_ms: Option<(u64, u64)>,
}

impl Latency {
    /// Uniformly random delay within `[min_ms, max_ms]` per call.
    pub fn uniform(min_ms: u64, max_ms: u64) -> Self {
        Self {
            delay_ms: Some((min_ms.min(max_ms), min_ms.max(max_ms))),
        }
    }

    /// No sleeping at all. Operations still yield to the runtime.
    pub fn none() -> Self {
        Self { delay_ms: None }
    }

    /// The default 200..=500ms range.
    pub fn simulated() -> Self {
        Self::uniform(DEFAULT_MIN_DELAY_MS, DEFAULT_MAX_DELAY_MS)
    }

    async fn wait(&self) {
        match self.delay_ms {
            Some((min_ms, max_ms)) => {
                let delay = rand::thread_rng().gen_range(min_ms..=max_ms);
                tokio::time::sleep(Duration::from_millis(delay)).await;
            }
            None => tokio::task::yield_now().await,
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::simulated()
    }
}

/// Authoritative in-memory task collection for the session.
///
/// Constructed explicitly (no hidden singleton) and shared by reference;
/// one instance lives for the whole process. The lock is held only for the
/// atomic read-or-mutate step, never across the simulated delay.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Mutex<Vec<Task>>,
    latency: Latency,
}

impl TaskStore {
    pub fn new(seed: Vec<Task>, latency: Latency) -> Self {
        Self {
            tasks: Mutex::new(seed),
            latency,
        }
    }

    /// Snapshot copy of all tasks in insertion order.
    pub async fn get_all(&self) -> Vec<Task> {
        self.latency.wait().await;
        self.tasks.lock().await.clone()
    }

    /// Copy of a single task, or `None` when the id is unknown.
    pub async fn get_by_id(&self, id: &str) -> Option<Task> {
        self.latency.wait().await;
        self.tasks.lock().await.iter().find(|task| task.id == id).cloned()
    }

    /// Create a task from a draft: fresh ULID id, `status = Todo`,
    /// `created_at = now`, `completed_at = None`. Returns the stored copy.
    pub async fn create(&self, draft: TaskDraft) -> Result<Task> {
        self.latency.wait().await;
        let title = normalized_title(&draft.title)?;
        let task = Task {
            id: Ulid::new().to_string(),
            title,
            description: draft.description,
            priority: draft.priority,
            status: Status::Todo,
            category: draft.category,
            due_date: draft.due_date,
            created_at: Utc::now(),
            completed_at: None,
        };
        let mut tasks = self.tasks.lock().await;
        tasks.push(task.clone());
        debug!(id = %task.id, title = %task.title, "created task");
        Ok(task)
    }

    /// Merge a patch onto the task with the given id by shallow overwrite.
    /// Returns the updated copy, or `TaskNotFound` when the id is absent.
    pub async fn update(&self, id: &str, mut patch: TaskPatch) -> Result<Task> {
        self.latency.wait().await;
        if let Some(raw) = patch.title.take() {
            patch.title = Some(normalized_title(&raw)?);
        }
        let mut tasks = self.tasks.lock().await;
        let task = tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| Error::TaskNotFound(id.to_string()))?;
        patch.apply(task);
        debug!(id = %task.id, "updated task");
        Ok(task.clone())
    }

    /// Remove the task with the given id. `TaskNotFound` when absent; no
    /// soft-delete or tombstone is kept.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.latency.wait().await;
        let mut tasks = self.tasks.lock().await;
        let index = tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or_else(|| Error::TaskNotFound(id.to_string()))?;
        tasks.remove(index);
        debug!(%id, "deleted task");
        Ok(())
    }

    /// Snapshot of tasks with the given status, insertion order preserved.
    pub async fn get_by_status(&self, status: Status) -> Vec<Task> {
        self.latency.wait().await;
        self.tasks
            .lock()
            .await
            .iter()
            .filter(|task| task.status == status)
            .cloned()
            .collect()
    }

    /// Snapshot of tasks in the named category, insertion order preserved.
    pub async fn get_by_category(&self, name: &str) -> Vec<Task> {
        self.latency.wait().await;
        self.tasks
            .lock()
            .await
            .iter()
            .filter(|task| task.category.as_deref() == Some(name))
            .cloned()
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.tasks.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tasks.lock().await.is_empty()
    }
}

/// Read-only category collection for the session.
#[derive(Debug)]
pub struct CategoryStore {
    categories: Vec<Category>,
    latency: Latency,
}

impl CategoryStore {
    pub fn new(categories: Vec<Category>, latency: Latency) -> Self {
        Self { categories, latency }
    }

    /// Snapshot copy of all categories in fixture order.
    pub async fn get_all(&self) -> Vec<Category> {
        self.latency.wait().await;
        self.categories.clone()
    }
}
