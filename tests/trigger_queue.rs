#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tsk::db::triggers::Triggers;
    use tsk::libs::reminder::{self, TriggerQueue};

    struct TriggerTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for TriggerTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TriggerTestContext { _temp_dir: temp_dir }
        }
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
    }

    #[test_context(TriggerTestContext)]
    #[test]
    fn test_scheduled_triggers_are_durable(_ctx: &mut TriggerTestContext) {
        let now = at(2025, 3, 1, 8, 0);
        {
            let mut queue = Triggers::new().unwrap();
            let count = reminder::schedule(&mut queue, 1, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(), false, now).unwrap();
            assert_eq!(count, 2);
        }

        // A fresh connection sees the same rows
        let mut queue = Triggers::new().unwrap();
        let pending = queue.pending_by_tag("task_reminder_1").unwrap();
        assert_eq!(pending.len(), 2);
        assert_eq!(pending[0].fire_at, at(2025, 3, 9, 9, 0));
        assert_eq!(pending[1].fire_at, at(2025, 3, 10, 9, 0));
    }

    #[test_context(TriggerTestContext)]
    #[test]
    fn test_cancel_removes_only_matching_tag(_ctx: &mut TriggerTestContext) {
        let mut queue = Triggers::new().unwrap();
        let now = at(2025, 3, 1, 8, 0);
        reminder::schedule(&mut queue, 1, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(), false, now).unwrap();
        reminder::schedule(&mut queue, 2, NaiveDate::from_ymd_opt(2025, 3, 12).unwrap(), false, now).unwrap();

        let cancelled = queue.cancel_all_by_tag("task_reminder_1").unwrap();
        assert_eq!(cancelled, 2);

        assert!(queue.pending_by_tag("task_reminder_1").unwrap().is_empty());
        assert_eq!(queue.pending_by_tag("task_reminder_2").unwrap().len(), 2);
    }

    #[test_context(TriggerTestContext)]
    #[test]
    fn test_due_returns_only_elapsed_unfired(_ctx: &mut TriggerTestContext) {
        let mut queue = Triggers::new().unwrap();
        let now = at(2025, 3, 1, 8, 0);
        reminder::schedule(&mut queue, 1, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(), false, now).unwrap();

        assert!(queue.due(at(2025, 3, 9, 8, 59)).unwrap().is_empty());

        let due = queue.due(at(2025, 3, 9, 9, 0)).unwrap();
        assert_eq!(due.len(), 1);
        assert!(!due[0].due_today);

        // Both triggers have elapsed by the due day
        let due = queue.due(at(2025, 3, 10, 9, 0)).unwrap();
        assert_eq!(due.len(), 2);
    }

    #[test_context(TriggerTestContext)]
    #[test]
    fn test_mark_fired_is_terminal(_ctx: &mut TriggerTestContext) {
        let mut queue = Triggers::new().unwrap();
        let now = at(2025, 3, 1, 8, 0);
        reminder::schedule(&mut queue, 1, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(), false, now).unwrap();

        let check = at(2025, 3, 10, 10, 0);
        let due = queue.due(check).unwrap();
        assert_eq!(due.len(), 2);

        // Until marked, the same trigger keeps being offered
        assert_eq!(queue.due(check).unwrap().len(), 2);

        for trigger in due {
            queue.mark_fired(trigger.id).unwrap();
        }
        assert!(queue.due(check).unwrap().is_empty());
    }

    #[test_context(TriggerTestContext)]
    #[test]
    fn test_cancel_leaves_fired_history(_ctx: &mut TriggerTestContext) {
        let mut queue = Triggers::new().unwrap();
        let now = at(2025, 3, 1, 8, 0);
        reminder::schedule(&mut queue, 1, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(), false, now).unwrap();

        let due = queue.due(at(2025, 3, 9, 9, 0)).unwrap();
        queue.mark_fired(due[0].id).unwrap();

        // Cancel only touches unfired rows
        let cancelled = queue.cancel_all_by_tag("task_reminder_1").unwrap();
        assert_eq!(cancelled, 1);
    }
}
