use taskflow::task::Status;
use taskflow::view::{
    filter_tasks, is_overdue, qualifies_for_today, CategoryFilter, TaskQuery, TaskStats, ViewMode,
};

mod support;

use support::{date, task};

#[test]
fn default_query_returns_every_task_in_order() {
    let tasks = vec![
        task("1", "Write report", Status::Todo),
        task("2", "Review PRs", Status::InProgress),
        task("3", "Ship release", Status::Completed),
    ];

    let filtered = filter_tasks(&tasks, &TaskQuery::default(), date(2024, 6, 15));
    assert_eq!(
        filtered.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
        vec!["1", "2", "3"]
    );
}

#[test]
fn stats_are_independent_of_the_active_filters() {
    let today = date(2024, 6, 15);
    let mut report = task("1", "Write report", Status::Todo);
    report.due_date = Some(date(2024, 6, 10));
    let review = task("2", "Review PRs", Status::InProgress);
    let ship = task("3", "Ship release", Status::Completed);
    let tasks = vec![report, review, ship];

    let unfiltered_stats = TaskStats::compute(&tasks, today);

    let query = TaskQuery {
        search: "report".to_string(),
        ..TaskQuery::default()
    };
    let filtered = filter_tasks(&tasks, &query, today);
    assert_eq!(filtered.len(), 1);

    // The overview is computed over the full collection, never the view.
    assert_eq!(TaskStats::compute(&tasks, today), unfiltered_stats);
    assert_eq!(unfiltered_stats.total, 3);
    assert_eq!(unfiltered_stats.overdue, 1);
}

#[test]
fn overdue_classification_matches_the_reference_scenario() {
    let today = date(2024, 6, 15);
    let mut open = task("1", "Pay invoice", Status::Todo);
    open.due_date = Some(date(2024, 6, 10));

    assert!(is_overdue(date(2024, 6, 10), today));
    assert_eq!(TaskStats::compute(std::slice::from_ref(&open), today).overdue, 1);

    let mut done = open.clone();
    done.status = Status::Completed;
    // The pure date predicate still holds; only the stat excludes it.
    assert!(is_overdue(date(2024, 6, 10), today));
    assert_eq!(TaskStats::compute(std::slice::from_ref(&done), today).overdue, 0);
}

#[test]
fn today_view_takes_due_today_and_open_overdue_only() {
    let today = date(2024, 6, 15);

    let mut due_today = task("1", "Dentist", Status::Completed);
    due_today.due_date = Some(date(2024, 6, 15));
    let mut future = task("2", "Plan trip", Status::Todo);
    future.due_date = Some(date(2024, 6, 20));
    let mut overdue_open = task("3", "Groceries", Status::Todo);
    overdue_open.due_date = Some(date(2024, 6, 10));
    let undated = task("4", "Someday", Status::Todo);

    assert!(qualifies_for_today(&due_today, today));
    assert!(!qualifies_for_today(&future, today));
    assert!(qualifies_for_today(&overdue_open, today));
    assert!(!qualifies_for_today(&undated, today));

    let query = TaskQuery {
        view: ViewMode::Today,
        ..TaskQuery::default()
    };
    let agenda = filter_tasks(
        &[due_today, future, overdue_open, undated],
        &query,
        today,
    );
    assert_eq!(
        agenda.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
        vec!["1", "3"]
    );
}

#[test]
fn search_and_category_compose_with_the_view_filter() {
    let today = date(2024, 6, 15);

    let mut report = task("1", "Write report", Status::Todo);
    report.category = Some("Work".to_string());
    report.due_date = Some(date(2024, 6, 15));
    let mut errand = task("2", "Report broken lamp", Status::Todo);
    errand.category = Some("Home".to_string());
    errand.due_date = Some(date(2024, 6, 15));
    let mut future_report = task("3", "Draft next report", Status::Todo);
    future_report.category = Some("Work".to_string());
    future_report.due_date = Some(date(2024, 6, 22));

    let query = TaskQuery {
        search: "report".to_string(),
        category: CategoryFilter::parse("Work"),
        view: ViewMode::Today,
    };
    let matches = filter_tasks(&[report, errand, future_report], &query, today);
    assert_eq!(
        matches.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(),
        vec!["1"]
    );
}
