//! Reminder trigger computation and scheduling.
//!
//! A task gets up to two reminder triggers: one the day before it is due and
//! one on the due day itself, both firing at 09:00 local time. Scheduling is
//! cancel-then-create: every call first cancels all triggers tagged for the
//! task, then creates only the triggers whose fire time is still in the
//! future. Missed reminder windows are never back-filled.
//!
//! The clock is always an explicit parameter; nothing here reads the system
//! time, which keeps trigger computation deterministic under test.

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Hour of day (local) at which reminder triggers fire.
pub const REMINDER_HOUR: u32 = 9;

const TAG_PREFIX: &str = "task_reminder";

/// Derives the trigger tag for a task. All enqueue and cancel calls go
/// through this function so the pairing invariant cannot drift apart.
pub fn reminder_tag(task_id: i64) -> String {
    format!("{}_{}", TAG_PREFIX, task_id)
}

/// A scheduled (fire instant, payload) pair handed to the trigger queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    pub tag: String,
    pub fire_at: NaiveDateTime,
    pub task_id: i64,
    pub due_today: bool,
}

/// Destination for computed triggers. Implemented by the durable SQLite
/// queue; tests substitute an in-memory recorder.
pub trait TriggerQueue {
    fn enqueue(&mut self, trigger: &Trigger) -> Result<()>;
    fn cancel_all_by_tag(&mut self, tag: &str) -> Result<usize>;
}

/// Computes the triggers a task should have as of `now`.
///
/// Returns zero, one, or two triggers: the day-before reminder and the
/// due-day reminder, each at 09:00, keeping only those strictly in the
/// future. A completed task never yields triggers.
pub fn compute_triggers(task_id: i64, due_date: NaiveDate, completed: bool, now: NaiveDateTime) -> Vec<Trigger> {
    if completed {
        return Vec::new();
    }

    let fire_time = NaiveTime::from_hms_opt(REMINDER_HOUR, 0, 0).unwrap();
    let mut triggers = Vec::new();

    if let Some(day_before) = due_date.pred_opt() {
        let fire_at = day_before.and_time(fire_time);
        if fire_at > now {
            triggers.push(Trigger {
                tag: reminder_tag(task_id),
                fire_at,
                task_id,
                due_today: false,
            });
        }
    }

    let fire_at = due_date.and_time(fire_time);
    if fire_at > now {
        triggers.push(Trigger {
            tag: reminder_tag(task_id),
            fire_at,
            task_id,
            due_today: true,
        });
    }

    triggers
}

/// Replaces a task's triggers in the queue.
///
/// The cancel is unconditional, even for completed tasks with nothing new
/// to schedule, because a previous schedule may still be pending. Returns
/// the number of triggers created.
pub fn schedule(queue: &mut impl TriggerQueue, task_id: i64, due_date: NaiveDate, completed: bool, now: NaiveDateTime) -> Result<usize> {
    queue.cancel_all_by_tag(&reminder_tag(task_id))?;

    let triggers = compute_triggers(task_id, due_date, completed, now);
    for trigger in &triggers {
        queue.enqueue(trigger)?;
    }
    Ok(triggers.len())
}

/// Combines a due date with its `HH:MM` wall-clock time.
///
/// Malformed or missing components fall back to 00:00 instead of failing;
/// reminder fire times are unaffected since they are fixed at 09:00.
pub fn due_instant(due_date: NaiveDate, due_time: &str) -> NaiveDateTime {
    let mut parts = due_time.splitn(2, ':');
    let hour: u32 = parts.next().and_then(|p| p.trim().parse().ok()).unwrap_or(0);
    let minute: u32 = parts.next().and_then(|p| p.trim().parse().ok()).unwrap_or(0);

    let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_else(|| NaiveTime::from_hms_opt(0, 0, 0).unwrap());
    due_date.and_time(time)
}

/// Validates a `HH:MM` input string without being lenient.
pub fn is_valid_due_time(due_time: &str) -> bool {
    let parts: Vec<&str> = due_time.split(':').collect();
    if parts.len() != 2 {
        return false;
    }
    match (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
        (Ok(hour), Ok(minute)) => hour < 24 && minute < 60,
        _ => false,
    }
}
