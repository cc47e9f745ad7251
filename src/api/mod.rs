pub mod client;
pub mod types;

use async_trait::async_trait;

use crate::error::ApiError;
use types::{
    GradeResult, ProgressDoc, ProgressUpdateRequest, ProgressUpdateResponse, QuestDoc,
    StreakSummary, SubmissionRecord, SubmissionRequest,
};

pub use client::HttpApi;

/// The backend REST surface this core consumes. One method per endpoint;
/// services depend on the trait so the whole quest/activity flow can run
/// against an in-memory double in tests.
#[async_trait]
pub trait PracticeApi: Send + Sync {
    /// `GET /quests/{id}`
    async fn fetch_quest(&self, quest_id: &str) -> Result<QuestDoc, ApiError>;

    /// `GET /quests/progress/{id}`: the caller's progress, created
    /// server-side on first quest view.
    async fn fetch_progress(&self, quest_id: &str) -> Result<ProgressDoc, ApiError>;

    /// `POST /quests/progress`
    async fn update_progress(
        &self,
        request: &ProgressUpdateRequest,
    ) -> Result<ProgressUpdateResponse, ApiError>;

    /// `POST /submissions`
    async fn submit(&self, request: &SubmissionRequest) -> Result<GradeResult, ApiError>;

    /// `GET /submissions/problem/{id}`
    async fn problem_submissions(
        &self,
        problem_id: &str,
    ) -> Result<Vec<SubmissionRecord>, ApiError>;

    /// `GET /users/{id}/streak`
    async fn user_streak(&self, user_id: &str) -> Result<StreakSummary, ApiError>;
}
