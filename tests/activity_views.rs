mod common;

use std::sync::Arc;

use common::api::MockApi;
use common::fixtures::{at_noon, day, streak_with_history, submission};

use practice_core::activity::heatmap::heatmap_weeks;
use practice_core::workspace::Workspace;

#[tokio::test]
async fn it_builds_activity_overview_from_streak_history() {
    let api = Arc::new(MockApi::new());
    api.seed_streak(streak_with_history(
        2,
        6,
        vec![
            at_noon(day(2025, 8, 6)),
            at_noon(day(2025, 8, 7)),
            at_noon(day(2025, 8, 7)),
            at_noon(day(2025, 5, 1)),
        ],
    ));

    let workspace = Workspace::new(api);
    let summary = workspace
        .activity_overview("u-1", day(2025, 8, 7))
        .await
        .expect("overview");

    assert_eq!(summary.days.len(), 366);
    assert_eq!(summary.total_submissions, 4);
    assert_eq!(summary.active_days, 3);
    assert_eq!(summary.current_streak, 2);

    let last = summary.days.last().unwrap();
    assert_eq!(last.date, day(2025, 8, 7));
    assert_eq!(last.submission_count, 2);
}

#[tokio::test]
async fn it_renders_overview_into_aligned_heatmap() {
    let api = Arc::new(MockApi::new());
    api.seed_streak(streak_with_history(0, 0, vec![at_noon(day(2025, 8, 7))]));

    let workspace = Workspace::new(api);
    let summary = workspace
        .activity_overview("u-1", day(2025, 8, 7))
        .await
        .expect("overview");

    let weeks = heatmap_weeks(&summary.days);
    let rendered: usize = weeks
        .iter()
        .map(|week| week.iter().filter(|slot| slot.is_some()).count())
        .sum();
    assert_eq!(rendered, summary.days.len());

    // 2024-08-07 is a Wednesday: three leading placeholders
    assert_eq!(weeks[0].iter().filter(|slot| slot.is_none()).count(), 3);
}

#[tokio::test]
async fn it_serves_calendar_month_with_server_streaks() {
    let api = Arc::new(MockApi::new());
    api.seed_streak(streak_with_history(
        3,
        11,
        vec![at_noon(day(2025, 7, 4)), at_noon(day(2025, 7, 5))],
    ));

    let workspace = Workspace::new(api);
    let view = workspace
        .calendar_month("u-1", 2025, 7)
        .await
        .expect("fetch")
        .expect("view");

    assert_eq!(view.days.len(), 31);
    assert_eq!(view.active_days, 2);
    assert_eq!(view.current_streak, 3);
    assert_eq!(view.max_streak, 11);

    let invalid = workspace.calendar_month("u-1", 2025, 13).await.expect("fetch");
    assert!(invalid.is_none());
}

#[tokio::test]
async fn it_derives_problem_activity_ignoring_untimestamped_entries() {
    let api = Arc::new(MockApi::new());
    api.seed_submissions(vec![
        submission("s-1", "p-7", Some(at_noon(day(2025, 8, 7)))),
        submission("s-2", "p-7", Some(at_noon(day(2025, 8, 7)))),
        submission("s-3", "p-7", None),
    ]);

    let workspace = Workspace::new(api);
    let summary = workspace
        .problem_activity("p-7", day(2025, 8, 7))
        .await
        .expect("activity");

    assert_eq!(summary.total_submissions, 2);
    assert_eq!(summary.active_days, 1);
    assert_eq!(summary.current_streak, 1);
}

#[tokio::test]
async fn it_lists_problem_history_newest_first() {
    let api = Arc::new(MockApi::new());
    api.seed_submissions(vec![
        submission("s-1", "p-7", Some(at_noon(day(2025, 6, 1)))),
        submission("s-2", "p-7", None),
        submission("s-3", "p-7", Some(at_noon(day(2025, 6, 3)))),
    ]);

    let workspace = Workspace::new(api);
    let history = workspace.problem_history("p-7").await.expect("history");

    let ids: Vec<&str> = history.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["s-3", "s-1", "s-2"]);
}
