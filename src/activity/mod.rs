pub mod calendar;
pub mod heatmap;

use std::collections::HashMap;

use chrono::{DateTime, Months, NaiveDate, Utc};
use serde::Serialize;

use crate::api::types::SubmissionRecord;
use crate::constants::ACTIVITY_WINDOW_MONTHS;

/// One calendar day of the trailing-year activity window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayBucket {
    pub date: NaiveDate,
    pub submission_count: u32,
}

/// Derived activity statistics for the profile heatmap. Never stored;
/// recomputed from the submission list on every input change.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySummary {
    pub days: Vec<DayBucket>,
    pub active_days: u32,
    pub max_streak: u32,
    pub current_streak: u32,
    pub total_submissions: u64,
}

/// Calendar-day attribution: a submission belongs to its UTC day.
/// 历史版本按渲染端本地时区分桶，跨时区会差一天；统一按 UTC 归桶
pub fn solve_day(solved_at: DateTime<Utc>) -> NaiveDate {
    solved_at.date_naive()
}

/// Start of the activity window: `reference` minus one calendar year.
/// Calendar subtraction, not a fixed 365 days; Feb 29 clamps to Feb 28 when
/// landing in a non-leap year.
pub fn window_start(reference: NaiveDate) -> NaiveDate {
    reference
        .checked_sub_months(Months::new(ACTIVITY_WINDOW_MONTHS))
        .unwrap_or(reference)
}

/// Bucket solve timestamps into the daily window ending at `reference`
/// inclusive and derive streak statistics in one pass.
///
/// The day sequence covers every day of the window exactly once, contiguous
/// and ascending. An empty input yields a fully-populated all-zero sequence,
/// never an error.
pub fn compute_activity<I>(solve_times: I, reference: NaiveDate) -> ActivitySummary
where
    I: IntoIterator<Item = DateTime<Utc>>,
{
    let start = window_start(reference);

    let mut counts: HashMap<NaiveDate, u32> = HashMap::new();
    for solved_at in solve_times {
        let day = solve_day(solved_at);
        if day < start || day > reference {
            continue;
        }
        *counts.entry(day).or_insert(0) += 1;
    }

    let mut days = Vec::new();
    let mut active_days = 0u32;
    let mut total_submissions = 0u64;
    let mut max_streak = 0u32;
    let mut run = 0u32;

    let mut cursor = start;
    while cursor <= reference {
        let submission_count = counts.get(&cursor).copied().unwrap_or(0);
        if submission_count > 0 {
            active_days += 1;
            total_submissions += u64::from(submission_count);
            run += 1;
            max_streak = max_streak.max(run);
        } else {
            run = 0;
        }
        days.push(DayBucket {
            date: cursor,
            submission_count,
        });
        cursor = match cursor.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    // 当前连击从窗口最后一天往回数，遇到零提交即停；最后一天无提交则为 0
    let current_streak = days
        .iter()
        .rev()
        .take_while(|day| day.submission_count > 0)
        .count() as u32;

    ActivitySummary {
        days,
        active_days,
        max_streak,
        current_streak,
        total_submissions,
    }
}

/// [`compute_activity`] over past-submission records; entries the backend
/// never timestamped are ignored.
pub fn submission_activity(
    submissions: &[SubmissionRecord],
    reference: NaiveDate,
) -> ActivitySummary {
    compute_activity(submissions.iter().filter_map(|s| s.solved_at), reference)
}
