use chrono::{NaiveDate, Utc};
use taskflow::store::{Latency, TaskStore};
use taskflow::task::{Priority, Status, Task, TaskDraft};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub fn task(id: &str, title: &str, status: Status) -> Task {
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

pub fn draft(title: &str) -> TaskDraft {
    TaskDraft::new(title)
}

/// Store with no artificial delay, for deterministic-latency tests.
pub fn instant_store(tasks: Vec<Task>) -> TaskStore {
    TaskStore::new(tasks, Latency::none())
}
