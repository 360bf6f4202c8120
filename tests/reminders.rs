#[cfg(test)]
mod tests {
    use anyhow::Result;
    use chrono::{NaiveDate, NaiveDateTime};
    use tsk::libs::reminder::{self, Trigger, TriggerQueue, REMINDER_HOUR};
    use tsk::libs::task::Task;
    use tsk::libs::task_type::TaskType;
    use tsk::libs::view::View;

    /// In-memory queue that records every call for assertion.
    #[derive(Default)]
    struct RecordingQueue {
        enqueued: Vec<Trigger>,
        cancelled_tags: Vec<String>,
    }

    impl TriggerQueue for RecordingQueue {
        fn enqueue(&mut self, trigger: &Trigger) -> Result<()> {
            self.enqueued.push(trigger.clone());
            Ok(())
        }

        fn cancel_all_by_tag(&mut self, tag: &str) -> Result<usize> {
            self.cancelled_tags.push(tag.to_string());
            Ok(0)
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn test_tag_derivation() {
        assert_eq!(reminder::reminder_tag(42), "task_reminder_42");
        assert_eq!(reminder::reminder_tag(7), "task_reminder_7");
    }

    #[test]
    fn test_schedule_far_future_creates_both_triggers() {
        let mut queue = RecordingQueue::default();
        let now = at(2025, 3, 1, 8, 0);
        let count = reminder::schedule(&mut queue, 1, date(2025, 3, 10), false, now).unwrap();

        assert_eq!(count, 2);
        assert_eq!(queue.cancelled_tags, vec!["task_reminder_1"]);
        assert_eq!(queue.enqueued.len(), 2);

        let day_before = &queue.enqueued[0];
        assert_eq!(day_before.fire_at, at(2025, 3, 9, REMINDER_HOUR, 0));
        assert!(!day_before.due_today);
        assert_eq!(day_before.tag, "task_reminder_1");

        let due_day = &queue.enqueued[1];
        assert_eq!(due_day.fire_at, at(2025, 3, 10, REMINDER_HOUR, 0));
        assert!(due_day.due_today);
        assert_eq!(due_day.tag, "task_reminder_1");
    }

    #[test]
    fn test_schedule_completed_cancels_without_creating() {
        let mut queue = RecordingQueue::default();
        let now = at(2025, 3, 1, 8, 0);
        let count = reminder::schedule(&mut queue, 5, date(2025, 3, 10), true, now).unwrap();

        assert_eq!(count, 0);
        assert!(queue.enqueued.is_empty());
        // The cancel still happens so stale triggers from an earlier
        // schedule cannot survive completion
        assert_eq!(queue.cancelled_tags, vec!["task_reminder_5"]);
    }

    #[test]
    fn test_schedule_past_both_windows_creates_nothing() {
        let mut queue = RecordingQueue::default();
        let now = at(2025, 3, 10, 10, 0);
        let count = reminder::schedule(&mut queue, 2, date(2025, 3, 10), false, now).unwrap();

        assert_eq!(count, 0);
        assert!(queue.enqueued.is_empty());
        assert_eq!(queue.cancelled_tags.len(), 1);
    }

    #[test]
    fn test_schedule_past_day_before_keeps_due_day() {
        let mut queue = RecordingQueue::default();
        let now = at(2025, 3, 9, 10, 0);
        let count = reminder::schedule(&mut queue, 3, date(2025, 3, 10), false, now).unwrap();

        assert_eq!(count, 1);
        assert!(queue.enqueued[0].due_today);
        assert_eq!(queue.enqueued[0].fire_at, at(2025, 3, 10, REMINDER_HOUR, 0));
    }

    #[test]
    fn test_fire_time_exactly_now_is_not_future() {
        let now = at(2025, 3, 10, REMINDER_HOUR, 0);
        let triggers = reminder::compute_triggers(4, date(2025, 3, 10), false, now);
        assert!(triggers.is_empty());
    }

    #[test]
    fn test_rescheduling_cancels_each_time() {
        let mut queue = RecordingQueue::default();
        let now = at(2025, 3, 1, 8, 0);
        reminder::schedule(&mut queue, 9, date(2025, 3, 10), false, now).unwrap();
        reminder::schedule(&mut queue, 9, date(2025, 3, 20), false, now).unwrap();

        assert_eq!(queue.cancelled_tags, vec!["task_reminder_9", "task_reminder_9"]);
        assert_eq!(queue.enqueued.len(), 4);
    }

    #[test]
    fn test_due_instant_parses_wall_clock_time() {
        let instant = reminder::due_instant(date(2025, 3, 10), "14:30");
        assert_eq!(instant, at(2025, 3, 10, 14, 30));
    }

    #[test]
    fn test_due_instant_malformed_falls_back_to_midnight() {
        assert_eq!(reminder::due_instant(date(2025, 3, 10), "25:99"), at(2025, 3, 10, 0, 0));
        assert_eq!(reminder::due_instant(date(2025, 3, 10), "0930"), at(2025, 3, 10, 0, 0));
        assert_eq!(reminder::due_instant(date(2025, 3, 10), "noon"), at(2025, 3, 10, 0, 0));
        assert_eq!(reminder::due_instant(date(2025, 3, 10), ""), at(2025, 3, 10, 0, 0));
    }

    #[test]
    fn test_overdue_uses_wall_clock_due_time() {
        let mut task = Task::new("Lab report", "Physics II", TaskType::Assignment, date(2025, 3, 10)).with_due_time("14:00");
        assert!(!task.is_overdue(at(2025, 3, 10, 13, 59)));
        assert!(task.is_overdue(at(2025, 3, 10, 14, 1)));

        task.completed = true;
        assert!(!task.is_overdue(at(2025, 3, 10, 14, 1)));
    }

    #[test]
    fn test_overdue_malformed_time_counts_from_midnight() {
        let task = Task::new("Essay", "History", TaskType::Assignment, date(2025, 3, 10)).with_due_time("noon");
        assert!(!task.is_overdue(at(2025, 3, 9, 23, 59)));
        assert!(task.is_overdue(at(2025, 3, 10, 0, 1)));
    }

    #[test]
    fn test_urgency_badge_prefers_overdue() {
        let task = Task::new("Quiz prep", "Math", TaskType::Quiz1, date(2025, 3, 10)).with_due_time("08:00");
        // Due today but the due instant has not passed yet
        assert_eq!(View::urgency_badge(&task, at(2025, 3, 10, 7, 0)), "Today");
        // Past the due instant the classifier label gives way
        assert_eq!(View::urgency_badge(&task, at(2025, 3, 10, 9, 0)), "Overdue");
    }

    #[test]
    fn test_due_time_validation() {
        assert!(reminder::is_valid_due_time("09:00"));
        assert!(reminder::is_valid_due_time("23:59"));
        assert!(!reminder::is_valid_due_time("24:00"));
        assert!(!reminder::is_valid_due_time("12:60"));
        assert!(!reminder::is_valid_due_time("noon"));
        assert!(!reminder::is_valid_due_time("12:00:00"));
    }
}
