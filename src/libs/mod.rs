//! Core library modules for the tsk application.
//!
//! Serves as the main entry point for all tsk library components, providing
//! a centralized access point to the application's core functionality.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Task Domain**: Task model, academic task kinds, urgency classification
//! - **Reminders**: Trigger computation, delivery, background watcher
//! - **User Interface**: Console rendering and formatting
//! - **System Integration**: Daemon management, secure secret storage

pub mod config;
pub mod daemon;
pub mod data_storage;
pub mod messages;
pub mod notifier;
pub mod reminder;
pub mod secret;
pub mod task;
pub mod task_type;
pub mod urgency;
pub mod view;
pub mod watcher;
