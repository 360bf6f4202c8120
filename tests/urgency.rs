#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tsk::libs::urgency::Urgency;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_due_today() {
        let today = date(2025, 3, 10);
        assert_eq!(Urgency::classify(today, today), Some(Urgency::Today));
    }

    #[test]
    fn test_due_tomorrow() {
        let today = date(2025, 3, 10);
        assert_eq!(Urgency::classify(date(2025, 3, 11), today), Some(Urgency::Tomorrow));
    }

    #[test]
    fn test_due_later_this_week() {
        // 2025-03-10 is a Monday; Friday is in the same ISO week
        let today = date(2025, 3, 10);
        assert_eq!(Urgency::classify(date(2025, 3, 14), today), Some(Urgency::ThisWeek));
    }

    #[test]
    fn test_due_next_week_gets_no_label() {
        // Sunday 2025-03-16 closes the ISO week; Monday the 17th is outside it
        let today = date(2025, 3, 10);
        assert_eq!(Urgency::classify(date(2025, 3, 17), today), None);
    }

    #[test]
    fn test_due_far_future_gets_no_label() {
        let today = date(2025, 3, 10);
        assert_eq!(Urgency::classify(date(2025, 6, 1), today), None);
    }

    #[test]
    fn test_today_wins_over_week_membership() {
        // The due date is also inside the current week; the more specific
        // label must win
        let today = date(2025, 3, 12);
        assert_eq!(Urgency::classify(today, today), Some(Urgency::Today));
        assert_eq!(Urgency::classify(date(2025, 3, 13), today), Some(Urgency::Tomorrow));
    }

    #[test]
    fn test_tomorrow_across_month_boundary() {
        let today = date(2025, 3, 31);
        assert_eq!(Urgency::classify(date(2025, 4, 1), today), Some(Urgency::Tomorrow));
    }

    #[test]
    fn test_same_iso_week_across_year_boundary() {
        // Tue 2024-12-31 and Fri 2025-01-03 are both in ISO week 1 of 2025
        let today = date(2024, 12, 31);
        assert_eq!(Urgency::classify(date(2025, 1, 3), today), Some(Urgency::ThisWeek));
    }

    #[test]
    fn test_equal_week_number_of_other_year_does_not_match() {
        // Week 11 of 2025 vs week 11 of 2026
        let today = date(2025, 3, 10);
        assert_eq!(Urgency::classify(date(2026, 3, 9), today), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Urgency::Today.to_string(), "Today");
        assert_eq!(Urgency::Tomorrow.to_string(), "Tomorrow");
        assert_eq!(Urgency::ThisWeek.to_string(), "This week");
    }
}
