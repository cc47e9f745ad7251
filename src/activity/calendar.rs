use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::api::types::StreakSummary;

use super::solve_day;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub active: bool,
}

/// One month of the dashboard calendar widget: per-day activity flags from
/// the solve history plus the server-reported streaks passed through as-is.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub days: Vec<CalendarDay>,
    pub active_days: u32,
    pub current_streak: u32,
    pub max_streak: u32,
}

/// Build the calendar for `year`/`month` from a streak payload. Returns
/// `None` for an invalid month; the widget renders nothing rather than
/// erroring.
pub fn month_view(summary: &StreakSummary, year: i32, month: u32) -> Option<MonthView> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;

    let active: HashSet<NaiveDate> = summary.history.iter().map(|ts| solve_day(*ts)).collect();

    let mut days = Vec::new();
    let mut cursor = first;
    while cursor.year() == year && cursor.month() == month {
        days.push(CalendarDay {
            date: cursor,
            active: active.contains(&cursor),
        });
        cursor = match cursor.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    let active_days = days.iter().filter(|d| d.active).count() as u32;
    Some(MonthView {
        year,
        month,
        days,
        active_days,
        current_streak: summary.current_streak,
        max_streak: summary.max_streak,
    })
}
