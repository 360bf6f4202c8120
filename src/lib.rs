//! # Tsk - Academic Task Tracker
//!
//! A command-line utility for tracking academic tasks, classifying their
//! urgency, and delivering deadline reminders.
//!
//! ## Features
//!
//! - **Task Management**: Create, edit, complete, and delete academic tasks
//! - **Urgency Classification**: Today / Tomorrow / This week badges in listings
//! - **Deadline Reminders**: Durable trigger queue drained by a background watcher
//! - **Custom Task Types**: User-defined kinds alongside the built-in ones
//! - **AI Study Assistant**: Gemini-backed prioritization and Q&A over your tasks
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tsk::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
