use chrono::Datelike;

use crate::constants::DAYS_PER_WEEK;

use super::DayBucket;

/// Group the daily window into Sunday-started week columns for the heatmap.
///
/// The first week is left-padded with `None` so the first real day lands in
/// its weekday row; the final week is left ragged. Rendering-only view: the
/// day-to-bucket mapping in [`super::compute_activity`] is the normative part.
pub fn heatmap_weeks(days: &[DayBucket]) -> Vec<Vec<Option<DayBucket>>> {
    let mut weeks: Vec<Vec<Option<DayBucket>>> = Vec::new();
    let mut week: Vec<Option<DayBucket>> = Vec::with_capacity(DAYS_PER_WEEK);

    for (index, day) in days.iter().enumerate() {
        if index == 0 {
            for _ in 0..day.date.weekday().num_days_from_sunday() {
                week.push(None);
            }
        }
        week.push(Some(day.clone()));
        if week.len() == DAYS_PER_WEEK {
            weeks.push(week);
            week = Vec::with_capacity(DAYS_PER_WEEK);
        }
    }
    if !week.is_empty() {
        weeks.push(week);
    }
    weeks
}
