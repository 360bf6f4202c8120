//! Database layer for the tsk application.
//!
//! SQLite-backed persistence with one module per table. SQL lives in
//! module-level constants and each module owns its own connection, opened
//! through the shared `Db` bootstrap. Tables are created idempotently on
//! first access.

/// Core database connection and initialization module.
pub mod db;

/// Task storage and filtering.
pub mod tasks;

/// User-defined task kinds.
pub mod task_types;

/// Durable reminder trigger queue drained by the watcher.
pub mod triggers;
