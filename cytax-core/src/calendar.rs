//! Filing-deadline calendar backing the countdown display.
//!
//! The schedule is a fixed annual list; queries resolve each entry to its
//! next occurrence on or after a given date, rolling into the next calendar
//! year once an occurrence has passed.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// A recurring annual filing deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilingDeadline {
    pub month: u32,
    pub day: u32,
    pub label: &'static str,
}

/// Annual schedule, in calendar order. Every entry falls on a day that
/// exists in every year.
pub const FILING_DEADLINES: [FilingDeadline; 5] = [
    FilingDeadline {
        month: 1,
        day: 31,
        label: "Deemed dividend distribution (SDC) declaration",
    },
    FilingDeadline {
        month: 3,
        day: 31,
        label: "Electronic corporate income-tax return (TD4)",
    },
    FilingDeadline {
        month: 6,
        day: 30,
        label: "SDC on rents and dividends, first half-year",
    },
    FilingDeadline {
        month: 7,
        day: 31,
        label: "Personal income-tax return (TD1) and first provisional-tax instalment",
    },
    FilingDeadline {
        month: 12,
        day: 31,
        label: "Second provisional-tax instalment",
    },
];

/// A deadline resolved against a concrete "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpcomingDeadline {
    pub deadline: FilingDeadline,
    pub date: NaiveDate,
    pub days_until: i64,
}

impl FilingDeadline {
    /// Next occurrence on or after `today`.
    fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        match NaiveDate::from_ymd_opt(today.year(), self.month, self.day) {
            Some(date) if date >= today => date,
            _ => NaiveDate::from_ymd_opt(today.year() + 1, self.month, self.day)
                .expect("schedule dates exist in every year"),
        }
    }
}

/// All deadlines resolved against `today`, soonest first.
pub fn upcoming_deadlines(today: NaiveDate) -> Vec<UpcomingDeadline> {
    let mut upcoming: Vec<UpcomingDeadline> = FILING_DEADLINES
        .iter()
        .map(|deadline| {
            let date = deadline.next_occurrence(today);
            UpcomingDeadline {
                deadline: *deadline,
                date,
                days_until: (date - today).num_days(),
            }
        })
        .collect();
    upcoming.sort_by_key(|u| u.date);
    upcoming
}

/// The soonest deadline on or after `today`.
pub fn next_deadline(today: NaiveDate) -> UpcomingDeadline {
    upcoming_deadlines(today)
        .into_iter()
        .next()
        .expect("schedule is not empty")
}
