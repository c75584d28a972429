//! Seed fixture loading.
//!
//! The session's initial data is a fixed list of task and category records,
//! loaded exactly once when the stores are assembled. The embedded fixture
//! is the default; a config override may point at JSON files on disk, which
//! drivers and tests use to start from a different snapshot.

use std::path::Path;

use tracing::debug;

use crate::category::Category;
use crate::config::Config;
use crate::error::Result;
use crate::store::{CategoryStore, TaskStore};
use crate::task::Task;

const EMBEDDED_TASKS: &str = include_str!("../data/tasks.json");
const EMBEDDED_CATEGORIES: &str = include_str!("../data/categories.json");

/// Parse the embedded task fixture.
pub fn default_tasks() -> Result<Vec<Task>> {
    Ok(serde_json::from_str(EMBEDDED_TASKS)?)
}

/// Parse the embedded category fixture.
pub fn default_categories() -> Result<Vec<Category>> {
    Ok(serde_json::from_str(EMBEDDED_CATEGORIES)?)
}

/// Load a task fixture from disk.
pub fn load_tasks(path: &Path) -> Result<Vec<Task>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load a category fixture from disk.
pub fn load_categories(path: &Path) -> Result<Vec<Category>> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Assemble the session task store from configuration.
pub fn task_store(config: &Config) -> Result<TaskStore> {
    let tasks = match &config.seed.tasks {
        Some(path) => load_tasks(path)?,
        None => default_tasks()?,
    };
    debug!(count = tasks.len(), "seeded task store");
    Ok(TaskStore::new(tasks, config.latency.latency()))
}

/// Assemble the session category store from configuration.
pub fn category_store(config: &Config) -> Result<CategoryStore> {
    let categories = match &config.seed.categories {
        Some(path) => load_categories(path)?,
        None => default_categories()?,
    };
    debug!(count = categories.len(), "seeded category store");
    Ok(CategoryStore::new(categories, config.latency.latency()))
}
