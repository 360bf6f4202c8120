use crate::db::tasks::Tasks;
use crate::db::triggers::Triggers;
use crate::libs::config::ReminderConfig;
use crate::libs::messages::Message;
use crate::libs::notifier;
use crate::{msg_debug, msg_error, msg_info};
use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use tokio::time::{self, Duration};

// Polls the trigger queue and delivers due reminders.
pub struct Watcher {
    config: ReminderConfig,
    triggers: Triggers,
    tasks: Tasks,
}

impl Watcher {
    pub fn new(config: ReminderConfig) -> Result<Self> {
        let triggers = Triggers::new()?;
        let tasks = Tasks::new()?;
        Ok(Watcher { config, triggers, tasks })
    }

    // Runs the polling loop until the process is stopped.
    pub async fn run(&mut self) -> Result<()> {
        msg_info!(Message::WatcherRunning(self.config.poll_interval));

        let mut interval = time::interval(Duration::from_secs(self.config.poll_interval.max(1)));
        loop {
            interval.tick().await;
            if let Err(e) = self.drain(Local::now().naive_local()) {
                msg_error!(Message::WatcherError(e.to_string()));
            }
        }
    }

    /// Delivers every trigger due as of `now` and marks it fired.
    ///
    /// A delivery failure is logged and dropped; the trigger is still marked
    /// fired, so a single failed render is terminal for that firing and the
    /// next naturally scheduled trigger is unaffected.
    pub fn drain(&mut self, now: NaiveDateTime) -> Result<usize> {
        let due = self.triggers.due(now)?;
        let count = due.len();

        for trigger in due {
            msg_debug!(format!("Firing trigger {} (tag: {})", trigger.id, trigger.tag));
            if let Err(e) = notifier::deliver(&mut self.tasks, trigger.task_id, trigger.due_today) {
                msg_error!(Message::ReminderDeliveryFailed(e.to_string()));
            }
            self.triggers.mark_fired(trigger.id)?;
        }
        Ok(count)
    }
}
