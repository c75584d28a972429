//! Pure derivations over task snapshots.
//!
//! Everything here is a stateless function of a snapshot plus the current
//! view parameters and a calendar date for "now". Nothing in this module
//! mutates the store.
//!
//! Two distinct date rules coexist on purpose:
//! - `is_overdue` / `is_due_today` are pure date predicates used for urgency
//!   styling, independent of task status.
//! - Today-view membership additionally folds in incomplete overdue tasks.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::Error;
use crate::task::{Status, Task};

/// Which of the two main views is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// All statuses, partitioned into columns.
    Board,
    /// Agenda of tasks due today plus incomplete overdue ones.
    Today,
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::Board
    }
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Board => "board",
            ViewMode::Today => "today",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "board" => Ok(ViewMode::Board),
            "today" => Ok(ViewMode::Today),
            other => Err(Error::InvalidArgument(format!(
                "unknown view mode '{other}' (expected board|today)"
            ))),
        }
    }
}

/// Sidebar category selection. The `"all"` sentinel accepted from callers
/// is a typed variant, not a magic string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Named(String),
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl CategoryFilter {
    /// Parse a selection where `"all"` (any case) means no filter.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(trimmed.to_string())
        }
    }

    /// Tasks without a category never match a named filter.
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => task.category.as_deref() == Some(name.as_str()),
        }
    }
}

/// The view parameters a snapshot is derived under.
#[derive(Debug, Clone, Default)]
pub struct TaskQuery {
    pub search: String,
    pub category: CategoryFilter,
    pub view: ViewMode,
}

/// Case-insensitive containment over title and description. An empty term
/// matches everything.
pub fn matches_search(task: &Task, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    if task.title.to_lowercase().contains(&needle) {
        return true;
    }
    task.description
        .as_deref()
        .map(|description| description.to_lowercase().contains(&needle))
        .unwrap_or(false)
}

/// Pure date predicate for urgency styling. A completed task with a past due
/// date is still overdue by this rule; completion only matters for today-view
/// membership and the overdue stat.
pub fn is_overdue(due: NaiveDate, today: NaiveDate) -> bool {
    due < today
}

pub fn is_due_today(due: NaiveDate, today: NaiveDate) -> bool {
    due == today
}

/// Today-view membership: the task has a due date, and it is either due
/// today (any status) or overdue and not yet completed. Tasks without a due
/// date never qualify.
pub fn qualifies_for_today(task: &Task, today: NaiveDate) -> bool {
    match task.due_date {
        Some(due) => {
            is_due_today(due, today)
                || (is_overdue(due, today) && task.status != Status::Completed)
        }
        None => false,
    }
}

/// Combined filter: search AND category AND (today membership when the view
/// is `Today`). Order of the input snapshot is preserved.
pub fn filter_tasks(tasks: &[Task], query: &TaskQuery, today: NaiveDate) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| {
            if !matches_search(task, &query.search) {
                return false;
            }
            if !query.category.matches(task) {
                return false;
            }
            match query.view {
                ViewMode::Board => true,
                ViewMode::Today => qualifies_for_today(task, today),
            }
        })
        .cloned()
        .collect()
}

/// Status-keyed buckets for the board view.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Columns {
    pub todo: Vec<Task>,
    pub in_progress: Vec<Task>,
    pub completed: Vec<Task>,
}

impl Columns {
    pub fn for_status(&self, status: Status) -> &[Task] {
        match status {
            Status::Todo => &self.todo,
            Status::InProgress => &self.in_progress,
            Status::Completed => &self.completed,
        }
    }

    pub fn total(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.completed.len()
    }
}

/// Partition an already-filtered task list into status columns. The match is
/// exhaustive: there is no fourth status for a task to fall through to.
pub fn partition_columns(tasks: Vec<Task>) -> Columns {
    let mut columns = Columns::default();
    for task in tasks {
        match task.status {
            Status::Todo => columns.todo.push(task),
            Status::InProgress => columns.in_progress.push(task),
            Status::Completed => columns.completed.push(task),
        }
    }
    columns
}

/// Aggregate counters for the sidebar overview.
///
/// Computed over the full, unfiltered collection: the overview must reflect
/// global counts regardless of the active search or category filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub overdue: usize,
}

impl TaskStats {
    pub fn compute(tasks: &[Task], today: NaiveDate) -> Self {
        let mut stats = TaskStats::default();
        for task in tasks {
            stats.total += 1;
            match task.status {
                Status::Completed => stats.completed += 1,
                Status::InProgress => stats.in_progress += 1,
                Status::Todo => {}
            }
            let overdue = task
                .due_date
                .map(|due| is_overdue(due, today))
                .unwrap_or(false);
            if overdue && task.status != Status::Completed {
                stats.overdue += 1;
            }
        }
        stats
    }
}

/// Per-category task count for the sidebar listing.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub color: String,
    pub count: usize,
}

pub fn category_counts(tasks: &[Task], categories: &[Category]) -> Vec<CategoryCount> {
    categories
        .iter()
        .map(|category| CategoryCount {
            name: category.name.clone(),
            color: category.color.clone(),
            count: tasks
                .iter()
                .filter(|task| task.category.as_deref() == Some(category.name.as_str()))
                .count(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Priority;
    use chrono::Utc;

    fn task(id: &str, title: &str, status: Status) -> Task {
        Task {
            id: id.to_string(),
            title: title.to_string(),
            description: None,
            priority: Priority::Medium,
            status,
            category: None,
            due_date: None,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn search_matches_title_or_description_case_insensitively() {
        let mut t = task("1", "Buy groceries", Status::Todo);
        t.description = Some("Milk and Eggs".to_string());

        assert!(matches_search(&t, ""));
        assert!(matches_search(&t, "GROC"));
        assert!(matches_search(&t, "eggs"));
        assert!(!matches_search(&t, "laundry"));
    }

    #[test]
    fn category_filter_all_matches_everything() {
        let mut t = task("1", "A", Status::Todo);
        assert!(CategoryFilter::All.matches(&t));
        assert!(!CategoryFilter::parse("Work").matches(&t));

        t.category = Some("Work".to_string());
        assert!(CategoryFilter::parse(" all ").matches(&t));
        assert!(CategoryFilter::parse("Work").matches(&t));
        assert!(!CategoryFilter::parse("Home").matches(&t));
    }

    #[test]
    fn today_membership_folds_in_incomplete_overdue() {
        let today = date(2024, 6, 15);

        let mut due_today = task("1", "A", Status::Completed);
        due_today.due_date = Some(date(2024, 6, 15));
        assert!(qualifies_for_today(&due_today, today));

        let mut overdue_open = task("2", "B", Status::Todo);
        overdue_open.due_date = Some(date(2024, 6, 10));
        assert!(qualifies_for_today(&overdue_open, today));

        let mut overdue_done = task("3", "C", Status::Completed);
        overdue_done.due_date = Some(date(2024, 6, 10));
        assert!(!qualifies_for_today(&overdue_done, today));

        let mut future = task("4", "D", Status::Todo);
        future.due_date = Some(date(2024, 6, 20));
        assert!(!qualifies_for_today(&future, today));

        let undated = task("5", "E", Status::Todo);
        assert!(!qualifies_for_today(&undated, today));
    }

    #[test]
    fn date_predicates_ignore_status() {
        let today = date(2024, 6, 15);
        assert!(is_overdue(date(2024, 6, 10), today));
        assert!(!is_overdue(date(2024, 6, 15), today));
        assert!(!is_overdue(date(2024, 6, 16), today));
        assert!(is_due_today(date(2024, 6, 15), today));
    }

    #[test]
    fn empty_query_returns_all_tasks_in_order() {
        let tasks = vec![
            task("1", "A", Status::Todo),
            task("2", "B", Status::InProgress),
            task("3", "C", Status::Completed),
        ];
        let filtered = filter_tasks(&tasks, &TaskQuery::default(), date(2024, 6, 15));
        assert_eq!(
            filtered.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
            vec!["1", "2", "3"]
        );
    }

    #[test]
    fn partition_is_exhaustive_over_statuses() {
        let tasks = vec![
            task("1", "A", Status::Completed),
            task("2", "B", Status::Todo),
            task("3", "C", Status::InProgress),
            task("4", "D", Status::Todo),
        ];
        let columns = partition_columns(tasks);
        assert_eq!(
            columns.todo.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
            vec!["2", "4"]
        );
        assert_eq!(columns.in_progress.len(), 1);
        assert_eq!(columns.completed.len(), 1);
        assert_eq!(columns.total(), 4);
    }

    #[test]
    fn stats_count_overdue_only_when_incomplete() {
        let today = date(2024, 6, 15);
        let mut overdue_open = task("1", "A", Status::Todo);
        overdue_open.due_date = Some(date(2024, 6, 10));
        let mut overdue_done = task("2", "B", Status::Completed);
        overdue_done.due_date = Some(date(2024, 6, 10));
        let in_progress = task("3", "C", Status::InProgress);

        let tasks = vec![overdue_open, overdue_done, in_progress];
        let stats = TaskStats::compute(&tasks, today);
        assert_eq!(
            stats,
            TaskStats {
                total: 3,
                completed: 1,
                in_progress: 1,
                overdue: 1,
            }
        );
    }

    #[test]
    fn category_counts_follow_fixture_order() {
        let categories = vec![
            Category {
                id: "1".to_string(),
                name: "Work".to_string(),
                color: "#6366f1".to_string(),
            },
            Category {
                id: "2".to_string(),
                name: "Home".to_string(),
                color: "#f59e0b".to_string(),
            },
        ];
        let mut a = task("1", "A", Status::Todo);
        a.category = Some("Work".to_string());
        let mut b = task("2", "B", Status::Todo);
        b.category = Some("Work".to_string());
        let c = task("3", "C", Status::Todo);

        let counts = category_counts(&[a, b, c], &categories);
        assert_eq!(counts[0].name, "Work");
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[1].name, "Home");
        assert_eq!(counts[1].count, 0);
    }
}
