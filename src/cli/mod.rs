//! Command-line interface for taskflow
//!
//! This module defines the CLI structure using clap derive macros.
//! Task mutations live in `task`, read-only views in `view`.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::output::OutputOptions;

mod task;
mod view;

/// taskflow - Kanban board and today agenda
///
/// A task board over an in-memory mock data layer: create, edit, and move
/// tasks between status columns, or view the board, the today agenda, and
/// aggregate stats.
#[derive(Parser, Debug)]
#[command(name = "taskflow")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration file (defaults to ./taskflow.toml)
    #[arg(long, global = true, env = "TASKFLOW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a task
    Add {
        /// Task title
        title: String,

        /// Longer description
        #[arg(long)]
        description: Option<String>,

        /// Priority: low, medium, high
        #[arg(long, default_value = "medium")]
        priority: String,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,

        /// Category name
        #[arg(long)]
        category: Option<String>,
    },

    /// List tasks with optional filters
    List {
        /// Only tasks with this status
        #[arg(long)]
        status: Option<String>,

        /// Only tasks in this category ("all" for no filter)
        #[arg(long)]
        category: Option<String>,

        /// Only tasks whose title or description contains this term
        #[arg(long)]
        search: Option<String>,
    },

    /// Show a single task
    Show {
        /// Task id
        id: String,
    },

    /// Edit task fields (status is changed with `move`)
    Edit {
        /// Task id
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// Remove the description
        #[arg(long, conflicts_with = "description")]
        clear_description: bool,

        /// New priority: low, medium, high
        #[arg(long)]
        priority: Option<String>,

        /// New due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,

        /// Remove the due date
        #[arg(long, conflicts_with = "due")]
        clear_due: bool,

        /// New category name
        #[arg(long)]
        category: Option<String>,

        /// Remove the category
        #[arg(long, conflicts_with = "category")]
        clear_category: bool,
    },

    /// Move a task to another status column
    Move {
        /// Task id
        id: String,

        /// Target status: todo, in-progress, completed
        status: String,
    },

    /// Delete a task
    Delete {
        /// Task id
        id: String,
    },

    /// Render the Kanban board columns
    Board {
        /// Only tasks whose title or description contains this term
        #[arg(long)]
        search: Option<String>,

        /// Only tasks in this category ("all" for no filter)
        #[arg(long)]
        category: Option<String>,
    },

    /// Render the today agenda (due today or overdue)
    Today {
        /// Only tasks whose title or description contains this term
        #[arg(long)]
        search: Option<String>,

        /// Only tasks in this category ("all" for no filter)
        #[arg(long)]
        category: Option<String>,
    },

    /// Render whichever view the configuration marks as default
    View {
        /// Only tasks whose title or description contains this term
        #[arg(long)]
        search: Option<String>,

        /// Only tasks in this category ("all" for no filter)
        #[arg(long)]
        category: Option<String>,
    },

    /// Show aggregate stats over all tasks
    Stats,

    /// List categories with task counts
    Categories,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::load_from_dir(Path::new(".")),
        };
        let options = OutputOptions {
            json: self.json,
            quiet: self.quiet,
        };

        match self.command {
            Commands::Add {
                title,
                description,
                priority,
                due,
                category,
            } => {
                task::add(
                    &config,
                    options,
                    task::AddOptions {
                        title,
                        description,
                        priority,
                        due,
                        category,
                    },
                )
                .await
            }
            Commands::List {
                status,
                category,
                search,
            } => {
                view::list(
                    &config,
                    options,
                    view::ListOptions {
                        status,
                        category,
                        search,
                    },
                )
                .await
            }
            Commands::Show { id } => task::show(&config, options, &id).await,
            Commands::Edit {
                id,
                title,
                description,
                clear_description,
                priority,
                due,
                clear_due,
                category,
                clear_category,
            } => {
                task::edit(
                    &config,
                    options,
                    task::EditOptions {
                        id,
                        title,
                        description,
                        clear_description,
                        priority,
                        due,
                        clear_due,
                        category,
                        clear_category,
                    },
                )
                .await
            }
            Commands::Move { id, status } => task::move_to(&config, options, &id, &status).await,
            Commands::Delete { id } => task::delete(&config, options, &id).await,
            Commands::Board { search, category } => {
                view::board(&config, options, search, category).await
            }
            Commands::Today { search, category } => {
                view::today(&config, options, search, category).await
            }
            Commands::View { search, category } => {
                match config.board.default_view_mode()? {
                    crate::view::ViewMode::Board => {
                        view::board(&config, options, search, category).await
                    }
                    crate::view::ViewMode::Today => {
                        view::today(&config, options, search, category).await
                    }
                }
            }
            Commands::Stats => view::stats(&config, options).await,
            Commands::Categories => view::categories(&config, options).await,
        }
    }
}

pub(crate) fn parse_due_date(value: &str) -> Result<chrono::NaiveDate> {
    value.trim().parse::<chrono::NaiveDate>().map_err(|_| {
        crate::error::Error::InvalidArgument(format!(
            "invalid date '{value}' (expected YYYY-MM-DD)"
        ))
    })
}
