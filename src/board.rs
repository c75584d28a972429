//! Board session state and the status transition controller.
//!
//! `transition` is the single write path that keeps `status` and
//! `completed_at` consistent; plain field edits must go through
//! `TaskStore::update` without touching either. `Board` holds the transient
//! UI parameters plus the drag-and-drop state machine.

use chrono::Utc;
use tracing::debug;

use crate::error::{Error, Result};
use crate::store::TaskStore;
use crate::task::{Status, Task, TaskPatch};
use crate::view::{CategoryFilter, TaskQuery, ViewMode};

/// Move a task to a new status column.
///
/// A vanished task is a no-op (`Ok(None)`) rather than an error: the drop
/// handler may race a deletion and expects the move to be skipped silently.
/// `completed_at` is set to now on entering `Completed` and
/// cleared on entering anything else, unconditionally overwriting whatever
/// was there before.
pub async fn transition(store: &TaskStore, id: &str, new_status: Status) -> Result<Option<Task>> {
    let Some(task) = store.get_by_id(id).await else {
        debug!(%id, "transition target vanished, skipping");
        return Ok(None);
    };

    let completed_at = if new_status == Status::Completed {
        Some(Utc::now())
    } else {
        None
    };
    let patch = TaskPatch {
        status: Some(new_status),
        completed_at: Some(completed_at),
        ..TaskPatch::default()
    };

    match store.update(&task.id, patch).await {
        Ok(updated) => Ok(Some(updated)),
        // Deleted between lookup and update; same lenient no-op.
        Err(Error::TaskNotFound(_)) => Ok(None),
        Err(err) => Err(err),
    }
}

/// Per-session view parameters and drag-and-drop state.
///
/// The drag states are purely transient: `dragged` names the task picked up,
/// `drop_target` the column currently hovered (visual feedback only). Both
/// are cleared unconditionally when a drop resolves, whether or not it moved
/// anything.
#[derive(Debug, Default)]
pub struct Board {
    search: String,
    category: CategoryFilter,
    view: ViewMode,
    dragged: Option<String>,
    drop_target: Option<Status>,
}

impl Board {
    pub fn new(view: ViewMode) -> Self {
        Self {
            view,
            ..Self::default()
        }
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn select_category(&mut self, filter: CategoryFilter) {
        self.category = filter;
    }

    pub fn set_view_mode(&mut self, view: ViewMode) {
        self.view = view;
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view
    }

    /// Current parameters for the derivation engine.
    pub fn query(&self) -> TaskQuery {
        TaskQuery {
            search: self.search.clone(),
            category: self.category.clone(),
            view: self.view,
        }
    }

    pub fn drag_start(&mut self, task_id: impl Into<String>) {
        self.dragged = Some(task_id.into());
    }

    pub fn drag_over(&mut self, column: Status) {
        self.drop_target = Some(column);
    }

    pub fn drag_leave(&mut self) {
        self.drop_target = None;
    }

    pub fn dragged(&self) -> Option<&str> {
        self.dragged.as_deref()
    }

    pub fn drop_target(&self) -> Option<Status> {
        self.drop_target
    }

    /// Resolve a drop on `column`.
    ///
    /// Issues a transition only when a task is being dragged and its current
    /// status differs from the target column; dropping a task onto its own
    /// column touches nothing. Returns the updated task when a move
    /// happened.
    pub async fn drop_on(&mut self, store: &TaskStore, column: Status) -> Result<Option<Task>> {
        let dragged = self.dragged.take();
        self.drop_target = None;

        let Some(task_id) = dragged else {
            return Ok(None);
        };
        let Some(task) = store.get_by_id(&task_id).await else {
            return Ok(None);
        };
        if task.status == column {
            return Ok(None);
        }
        transition(store, &task.id, column).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_state_tracks_task_and_target() {
        let mut board = Board::new(ViewMode::Board);
        assert!(board.dragged().is_none());

        board.drag_start("task-1");
        board.drag_over(Status::InProgress);
        assert_eq!(board.dragged(), Some("task-1"));
        assert_eq!(board.drop_target(), Some(Status::InProgress));

        board.drag_leave();
        assert_eq!(board.drop_target(), None);
        assert_eq!(board.dragged(), Some("task-1"));
    }

    #[test]
    fn query_reflects_current_parameters() {
        let mut board = Board::new(ViewMode::Board);
        board.set_search("report");
        board.select_category(CategoryFilter::parse("Work"));
        board.set_view_mode(ViewMode::Today);

        let query = board.query();
        assert_eq!(query.search, "report");
        assert_eq!(query.category, CategoryFilter::Named("Work".to_string()));
        assert_eq!(query.view, ViewMode::Today);
    }
}
