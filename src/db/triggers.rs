//! Durable reminder trigger queue.
//!
//! This is the deferred-execution side of the reminder system: triggers are
//! SQLite rows, so they survive process restarts, and the watcher drains the
//! ones whose fire time has passed. Firing is at-least-once; a row is only
//! marked fired after the delivery attempt has run, so a crash in between
//! re-delivers on the next poll.

use crate::db::db::Db;
use crate::libs::reminder::{Trigger, TriggerQueue};
use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection};

const SCHEMA_TRIGGERS: &str = "CREATE TABLE IF NOT EXISTS triggers (
    id INTEGER PRIMARY KEY,
    tag TEXT NOT NULL,
    fire_at TIMESTAMP NOT NULL,
    task_id INTEGER NOT NULL,
    due_today INTEGER NOT NULL,
    fired INTEGER NOT NULL DEFAULT 0,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";
const SCHEMA_TRIGGERS_TAG_IDX: &str = "CREATE INDEX IF NOT EXISTS idx_triggers_tag ON triggers(tag)";
const SCHEMA_TRIGGERS_FIRE_IDX: &str = "CREATE INDEX IF NOT EXISTS idx_triggers_fire ON triggers(fired, fire_at)";
const INSERT_TRIGGER: &str = "INSERT INTO triggers (tag, fire_at, task_id, due_today) VALUES (?1, ?2, ?3, ?4)";
const DELETE_BY_TAG: &str = "DELETE FROM triggers WHERE tag = ?1 AND fired = 0";
const SELECT_DUE: &str = "SELECT id, tag, fire_at, task_id, due_today FROM triggers
    WHERE fired = 0 AND fire_at <= ?1 ORDER BY fire_at ASC";
const SELECT_PENDING_BY_TAG: &str = "SELECT id, tag, fire_at, task_id, due_today FROM triggers
    WHERE tag = ?1 AND fired = 0 ORDER BY fire_at ASC";
const MARK_FIRED: &str = "UPDATE triggers SET fired = 1 WHERE id = ?1";

/// A trigger row as stored in the queue.
#[derive(Debug, Clone)]
pub struct QueuedTrigger {
    pub id: i64,
    pub tag: String,
    pub fire_at: NaiveDateTime,
    pub task_id: i64,
    pub due_today: bool,
}

pub struct Triggers {
    conn: Connection,
}

impl Triggers {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_TRIGGERS, [])?;
        db.conn.execute(SCHEMA_TRIGGERS_TAG_IDX, [])?;
        db.conn.execute(SCHEMA_TRIGGERS_FIRE_IDX, [])?;
        Ok(Self { conn: db.conn })
    }

    /// Unfired triggers whose fire time has passed as of `now`
    pub fn due(&mut self, now: NaiveDateTime) -> Result<Vec<QueuedTrigger>> {
        let mut stmt = self.conn.prepare(SELECT_DUE)?;
        let trigger_iter = stmt.query_map(params![now], Self::map_trigger)?;

        let mut triggers = Vec::new();
        for trigger in trigger_iter {
            triggers.push(trigger?);
        }
        Ok(triggers)
    }

    /// Unfired triggers for a tag, soonest first
    pub fn pending_by_tag(&mut self, tag: &str) -> Result<Vec<QueuedTrigger>> {
        let mut stmt = self.conn.prepare(SELECT_PENDING_BY_TAG)?;
        let trigger_iter = stmt.query_map(params![tag], Self::map_trigger)?;

        let mut triggers = Vec::new();
        for trigger in trigger_iter {
            triggers.push(trigger?);
        }
        Ok(triggers)
    }

    /// Mark a trigger as delivered; it will not be returned by `due` again
    pub fn mark_fired(&mut self, id: i64) -> Result<()> {
        self.conn.execute(MARK_FIRED, params![id])?;
        Ok(())
    }

    fn map_trigger(row: &rusqlite::Row<'_>) -> rusqlite::Result<QueuedTrigger> {
        Ok(QueuedTrigger {
            id: row.get(0)?,
            tag: row.get(1)?,
            fire_at: row.get(2)?,
            task_id: row.get(3)?,
            due_today: row.get(4)?,
        })
    }
}

impl TriggerQueue for Triggers {
    fn enqueue(&mut self, trigger: &Trigger) -> Result<()> {
        self.conn
            .execute(INSERT_TRIGGER, params![trigger.tag, trigger.fire_at, trigger.task_id, trigger.due_today])?;
        Ok(())
    }

    fn cancel_all_by_tag(&mut self, tag: &str) -> Result<usize> {
        Ok(self.conn.execute(DELETE_BY_TAG, params![tag])?)
    }
}
