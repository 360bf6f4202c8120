//! Due-date urgency classification.
//!
//! Classifies how soon a task is due relative to a reference date. The
//! reference date is always passed in so listings, AI context building, and
//! tests share one deterministic code path.
//!
//! "This week" uses chrono ISO weeks (Monday start). The comparison matches
//! both the ISO week number and the ISO week-based year, so a Dec 31 / Jan 1
//! pair inside one ISO week still counts as the same week, while an
//! equal-numbered week of a different year does not.

use chrono::{Datelike, Days, NaiveDate};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Today,
    Tomorrow,
    ThisWeek,
}

impl Urgency {
    /// Classifies a due date against a reference date.
    ///
    /// Priority order is `Today`, then `Tomorrow`, then `ThisWeek`; today and
    /// tomorrow win even though they also fall inside the current week.
    /// Dates outside the current ISO week get no label.
    pub fn classify(due: NaiveDate, today: NaiveDate) -> Option<Urgency> {
        if due == today {
            return Some(Urgency::Today);
        }
        if Some(due) == today.checked_add_days(Days::new(1)) {
            return Some(Urgency::Tomorrow);
        }
        let due_week = due.iso_week();
        let this_week = today.iso_week();
        if due_week.year() == this_week.year() && due_week.week() == this_week.week() {
            return Some(Urgency::ThisWeek);
        }
        None
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Urgency::Today => "Today",
            Urgency::Tomorrow => "Tomorrow",
            Urgency::ThisWeek => "This week",
        };
        write!(f, "{}", label)
    }
}
