//! taskflow read-only view commands: list, board, today, stats, categories.

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::board::Board;
use crate::config::Config;
use crate::error::Result;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::seed;
use crate::task::{Status, Task};
use crate::view::{
    self, category_counts, filter_tasks, partition_columns, CategoryFilter, Columns, TaskStats,
    ViewMode,
};

pub struct ListOptions {
    pub status: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
}

pub async fn list(config: &Config, options: OutputOptions, args: ListOptions) -> Result<()> {
    let store = seed::task_store(config)?;
    let today = local_today();

    let mut tasks = match args.status.as_deref() {
        Some(status) => store.get_by_status(status.parse::<Status>()?).await,
        None => store.get_all().await,
    };
    if let Some(category) = args.category.as_deref() {
        let filter = CategoryFilter::parse(category);
        tasks.retain(|task| filter.matches(task));
    }
    if let Some(search) = args.search.as_deref() {
        tasks.retain(|task| view::matches_search(task, search));
    }

    let mut human = HumanOutput::new(format!("{} task(s)", tasks.len()));
    for task in &tasks {
        human.push_detail(task_line(task, today));
    }
    emit_success(options, "list", &tasks, Some(&human))
}

#[derive(Serialize)]
struct BoardReport {
    columns: Columns,
    stats: TaskStats,
}

pub async fn board(
    config: &Config,
    options: OutputOptions,
    search: Option<String>,
    category: Option<String>,
) -> Result<()> {
    let store = seed::task_store(config)?;
    let today = local_today();

    let mut session = Board::new(ViewMode::Board);
    if let Some(search) = search {
        session.set_search(search);
    }
    if let Some(category) = category.as_deref() {
        session.select_category(CategoryFilter::parse(category));
    }

    let all = store.get_all().await;
    // Stats always cover the unfiltered collection.
    let stats = TaskStats::compute(&all, today);
    let filtered = filter_tasks(&all, &session.query(), today);
    let columns = partition_columns(filtered);

    let mut human = HumanOutput::new("Board");
    human.push_summary("total", stats.total.to_string());
    human.push_summary("overdue", stats.overdue.to_string());
    for status in Status::ALL {
        let tasks = columns.for_status(status);
        human.push_detail(format!("{} ({})", status.heading(), tasks.len()));
        for task in tasks {
            human.push_detail(format!("  {}", task_line(task, today)));
        }
    }

    emit_success(options, "board", &BoardReport { columns, stats }, Some(&human))
}

#[derive(Serialize)]
struct TodayReport {
    tasks: Vec<Task>,
    stats: TaskStats,
}

pub async fn today(
    config: &Config,
    options: OutputOptions,
    search: Option<String>,
    category: Option<String>,
) -> Result<()> {
    let store = seed::task_store(config)?;
    let today = local_today();

    let mut session = Board::new(ViewMode::Today);
    if let Some(search) = search {
        session.set_search(search);
    }
    if let Some(category) = category.as_deref() {
        session.select_category(CategoryFilter::parse(category));
    }

    let all = store.get_all().await;
    let stats = TaskStats::compute(&all, today);
    let tasks = filter_tasks(&all, &session.query(), today);

    let mut human = HumanOutput::new(format!("Today ({})", today));
    human.push_summary("due or overdue", tasks.len().to_string());
    human.push_summary("overdue overall", stats.overdue.to_string());
    for task in &tasks {
        human.push_detail(task_line(task, today));
    }

    emit_success(options, "today", &TodayReport { tasks, stats }, Some(&human))
}

pub async fn stats(config: &Config, options: OutputOptions) -> Result<()> {
    let store = seed::task_store(config)?;
    let all = store.get_all().await;
    let stats = TaskStats::compute(&all, local_today());

    let mut human = HumanOutput::new("Overview");
    human.push_summary("total", stats.total.to_string());
    human.push_summary("completed", stats.completed.to_string());
    human.push_summary("in progress", stats.in_progress.to_string());
    human.push_summary("overdue", stats.overdue.to_string());
    emit_success(options, "stats", &stats, Some(&human))
}

pub async fn categories(config: &Config, options: OutputOptions) -> Result<()> {
    let task_store = seed::task_store(config)?;
    let category_store = seed::category_store(config)?;

    let tasks = task_store.get_all().await;
    let categories = category_store.get_all().await;
    let counts = category_counts(&tasks, &categories);

    let mut human = HumanOutput::new("Categories");
    human.push_summary("all tasks", tasks.len().to_string());
    for count in &counts {
        human.push_detail(format!("{} ({}) {}", count.name, count.count, count.color));
    }
    emit_success(options, "categories", &counts, Some(&human))
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

fn task_line(task: &Task, today: NaiveDate) -> String {
    let mut line = format!("[{}] {} <{}>", task.priority, task.title, task.id);
    if let Some(category) = &task.category {
        line.push_str(&format!(" #{category}"));
    }
    if let Some(due) = task.due_date {
        if view::is_overdue(due, today) {
            line.push_str(&format!(" due {due} (overdue)"));
        } else if view::is_due_today(due, today) {
            line.push_str(&format!(" due {due} (today)"));
        } else {
            line.push_str(&format!(" due {due}"));
        }
    }
    line
}
