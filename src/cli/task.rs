//! taskflow task mutation commands.

use serde::Serialize;

use crate::board;
use crate::cli::parse_due_date;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::seed;
use crate::task::{Priority, Status, Task, TaskDraft, TaskPatch};

pub struct AddOptions {
    pub title: String,
    pub description: Option<String>,
    pub priority: String,
    pub due: Option<String>,
    pub category: Option<String>,
}

pub struct EditOptions {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub clear_description: bool,
    pub priority: Option<String>,
    pub due: Option<String>,
    pub clear_due: bool,
    pub category: Option<String>,
    pub clear_category: bool,
}

pub async fn add(config: &Config, options: OutputOptions, args: AddOptions) -> Result<()> {
    let store = seed::task_store(config)?;

    let draft = TaskDraft {
        title: args.title,
        description: args.description,
        priority: args.priority.parse::<Priority>()?,
        category: args.category,
        due_date: match args.due.as_deref() {
            Some(due) => Some(parse_due_date(due)?),
            None => None,
        },
    };

    let task = store.create(draft).await?;

    let mut human = HumanOutput::new(format!("Created task {}", task.id));
    push_task_summary(&mut human, &task);
    emit_success(options, "add", &task, Some(&human))
}

pub async fn show(config: &Config, options: OutputOptions, id: &str) -> Result<()> {
    let store = seed::task_store(config)?;
    let task = store
        .get_by_id(id)
        .await
        .ok_or_else(|| Error::TaskNotFound(id.to_string()))?;

    let mut human = HumanOutput::new(format!("Task {}", task.id));
    push_task_summary(&mut human, &task);
    if let Some(description) = &task.description {
        human.push_detail(description.clone());
    }
    emit_success(options, "show", &task, Some(&human))
}

pub async fn edit(config: &Config, options: OutputOptions, args: EditOptions) -> Result<()> {
    let store = seed::task_store(config)?;

    // Status and completion timestamp are deliberately absent here; `move`
    // is the only command that changes them.
    let patch = TaskPatch {
        title: args.title,
        description: if args.clear_description {
            Some(None)
        } else {
            args.description.map(Some)
        },
        priority: match args.priority.as_deref() {
            Some(priority) => Some(priority.parse::<Priority>()?),
            None => None,
        },
        due_date: if args.clear_due {
            Some(None)
        } else {
            match args.due.as_deref() {
                Some(due) => Some(Some(parse_due_date(due)?)),
                None => None,
            }
        },
        category: if args.clear_category {
            Some(None)
        } else {
            args.category.map(Some)
        },
        ..TaskPatch::default()
    };

    if patch.is_empty() {
        return Err(Error::InvalidArgument(
            "nothing to edit; pass at least one field flag".to_string(),
        ));
    }

    let task = store.update(&args.id, patch).await?;

    let mut human = HumanOutput::new(format!("Updated task {}", task.id));
    push_task_summary(&mut human, &task);
    emit_success(options, "edit", &task, Some(&human))
}

pub async fn move_to(config: &Config, options: OutputOptions, id: &str, status: &str) -> Result<()> {
    let store = seed::task_store(config)?;
    let new_status = status.parse::<Status>()?;

    let task = board::transition(&store, id, new_status)
        .await?
        .ok_or_else(|| Error::TaskNotFound(id.to_string()))?;

    let mut human = HumanOutput::new(format!("Moved task {} to {}", task.id, task.status));
    push_task_summary(&mut human, &task);
    if task.status == Status::Completed {
        human.push_detail("completion timestamp recorded".to_string());
    }
    emit_success(options, "move", &task, Some(&human))
}

pub async fn delete(config: &Config, options: OutputOptions, id: &str) -> Result<()> {
    let store = seed::task_store(config)?;
    store.delete(id).await?;

    #[derive(Serialize)]
    struct DeleteReport<'a> {
        id: &'a str,
        deleted: bool,
    }

    let human = HumanOutput::new(format!("Deleted task {id}"));
    emit_success(
        options,
        "delete",
        &DeleteReport { id, deleted: true },
        Some(&human),
    )
}

fn push_task_summary(human: &mut HumanOutput, task: &Task) {
    human.push_summary("title", task.title.clone());
    human.push_summary("status", task.status.to_string());
    human.push_summary("priority", task.priority.to_string());
    if let Some(category) = &task.category {
        human.push_summary("category", category.clone());
    }
    if let Some(due) = task.due_date {
        human.push_summary("due", due.to_string());
    }
}
