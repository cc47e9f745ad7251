use std::sync::Arc;

use chrono::NaiveDate;

use crate::activity::calendar::{month_view, MonthView};
use crate::activity::{compute_activity, submission_activity, ActivitySummary};
use crate::api::types::{GradeResult, SubmissionRecord, SubmissionRequest};
use crate::api::PracticeApi;
use crate::error::ApiError;

/// Read side of the problem workspace and the profile dashboard: past
/// submissions, the trailing-year activity overview, and the calendar
/// widget. Holds no mutable state: every call is a fetch plus a pure
/// derivation.
pub struct Workspace {
    api: Arc<dyn PracticeApi>,
}

impl Workspace {
    pub fn new(api: Arc<dyn PracticeApi>) -> Self {
        Self { api }
    }

    /// Grade an answer outside any quest context; the generic submission
    /// record is the only effect.
    pub async fn submit_answer(
        &self,
        problem_id: &str,
        answer: &str,
    ) -> Result<GradeResult, ApiError> {
        self.api
            .submit(&SubmissionRequest {
                problem_id: problem_id.to_string(),
                answer: answer.to_string(),
            })
            .await
    }

    /// Past submissions for the workspace sidebar, newest first. Entries
    /// without a timestamp sort last.
    pub async fn problem_history(
        &self,
        problem_id: &str,
    ) -> Result<Vec<SubmissionRecord>, ApiError> {
        let mut submissions = self.api.problem_submissions(problem_id).await?;
        submissions.sort_by(|a, b| b.solved_at.cmp(&a.solved_at));
        Ok(submissions)
    }

    /// Per-problem slice of the activity window, derived from that
    /// problem's past submissions.
    pub async fn problem_activity(
        &self,
        problem_id: &str,
        reference: NaiveDate,
    ) -> Result<ActivitySummary, ApiError> {
        let submissions = self.api.problem_submissions(problem_id).await?;
        Ok(submission_activity(&submissions, reference))
    }

    /// Profile heatmap data: the user's solve history bucketed over the
    /// trailing year ending at `reference`.
    pub async fn activity_overview(
        &self,
        user_id: &str,
        reference: NaiveDate,
    ) -> Result<ActivitySummary, ApiError> {
        let streak = self.api.user_streak(user_id).await?;
        Ok(compute_activity(streak.history.iter().copied(), reference))
    }

    /// One month of the dashboard calendar. `None` months (e.g. month 13
    /// from a bad route param) render as nothing, not as an error.
    pub async fn calendar_month(
        &self,
        user_id: &str,
        year: i32,
        month: u32,
    ) -> Result<Option<MonthView>, ApiError> {
        let streak = self.api.user_streak(user_id).await?;
        Ok(month_view(&streak, year, month))
    }
}
