//! taskflow - Task board core library
//!
//! This library provides the core of a Kanban-style task board with a
//! "today" agenda view, backed by an in-memory mock data layer seeded from
//! a JSON fixture once per session.
//!
//! # Core Concepts
//!
//! - **Stores**: session-owned in-memory task and category collections with
//!   simulated, injectable latency on every operation
//! - **Derivation**: pure functions computing filtered views, status
//!   columns, aggregate stats, and due-date classification from a snapshot
//! - **Transitions**: the single controller path that moves tasks between
//!   status columns and keeps the completion timestamp consistent
//! - **Board session**: per-session view parameters and the drag-and-drop
//!   state machine
//!
//! # Module Organization
//!
//! - `cli`: command-line interface using clap
//! - `config`: configuration loading from `taskflow.toml`
//! - `error`: error types and result aliases
//! - `task`: task data model (status, priority, drafts, patches)
//! - `category`: category data model
//! - `store`: in-memory mock stores with simulated latency
//! - `seed`: seed fixture loading
//! - `view`: pure derivations (filtering, columns, stats, date predicates)
//! - `board`: status transition controller and drag-and-drop session
//! - `output`: shared CLI output formatting

pub mod board;
pub mod category;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod seed;
pub mod store;
pub mod task;
pub mod view;

pub use error::{Error, Result};
