use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use practice_core::api::types::{
    GradeResult, ProgressDoc, ProgressUpdateRequest, ProgressUpdateResponse, QuestDoc,
    StreakSummary, SubmissionRecord, SubmissionRequest,
};
use practice_core::api::PracticeApi;
use practice_core::error::ApiError;

/// In-memory backend double. Seeded documents play the server's role;
/// scripted queues drive grading and progress-update responses; every call
/// is journaled so tests can assert ordering.
#[derive(Default)]
pub struct MockApi {
    calls: Mutex<Vec<String>>,
    quest: Mutex<Option<QuestDoc>>,
    progress: Mutex<Option<ProgressDoc>>,
    grades: Mutex<VecDeque<Result<GradeResult, ApiError>>>,
    updates: Mutex<VecDeque<Result<ProgressUpdateResponse, ApiError>>>,
    submissions: Mutex<Vec<SubmissionRecord>>,
    streak: Mutex<Option<StreakSummary>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn call_log(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn seed_quest(&self, doc: QuestDoc) {
        *self.quest.lock().unwrap() = Some(doc);
    }

    pub fn seed_progress(&self, doc: ProgressDoc) {
        *self.progress.lock().unwrap() = Some(doc);
    }

    pub fn seed_submissions(&self, records: Vec<SubmissionRecord>) {
        *self.submissions.lock().unwrap() = records;
    }

    pub fn seed_streak(&self, summary: StreakSummary) {
        *self.streak.lock().unwrap() = Some(summary);
    }

    pub fn script_grade(&self, result: Result<GradeResult, ApiError>) {
        self.grades.lock().unwrap().push_back(result);
    }

    pub fn script_update(&self, result: Result<ProgressUpdateResponse, ApiError>) {
        self.updates.lock().unwrap().push_back(result);
    }

    fn not_seeded(what: &str) -> ApiError {
        ApiError::Api {
            status: 404,
            code: "NOT_FOUND".to_string(),
            message: format!("{what} not seeded"),
        }
    }
}

#[async_trait]
impl PracticeApi for MockApi {
    async fn fetch_quest(&self, quest_id: &str) -> Result<QuestDoc, ApiError> {
        self.record(format!("GET /quests/{quest_id}"));
        self.quest
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| Self::not_seeded("quest"))
    }

    async fn fetch_progress(&self, quest_id: &str) -> Result<ProgressDoc, ApiError> {
        self.record(format!("GET /quests/progress/{quest_id}"));
        self.progress
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| Self::not_seeded("progress"))
    }

    async fn update_progress(
        &self,
        request: &ProgressUpdateRequest,
    ) -> Result<ProgressUpdateResponse, ApiError> {
        self.record(format!(
            "POST /quests/progress node={} problem={}",
            request.node_id, request.problem_id
        ));
        match self.updates.lock().unwrap().pop_front() {
            Some(Ok(response)) => {
                // 模拟服务器权威推进：后续 fetch 返回更新后的进度
                *self.progress.lock().unwrap() = Some(response.progress.clone());
                Ok(response)
            }
            Some(Err(error)) => Err(error),
            None => Err(ApiError::Validation("no scripted progress update".into())),
        }
    }

    async fn submit(&self, request: &SubmissionRequest) -> Result<GradeResult, ApiError> {
        self.record(format!("POST /submissions problem={}", request.problem_id));
        self.grades
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Validation("no scripted grade".into())))
    }

    async fn problem_submissions(
        &self,
        problem_id: &str,
    ) -> Result<Vec<SubmissionRecord>, ApiError> {
        self.record(format!("GET /submissions/problem/{problem_id}"));
        Ok(self.submissions.lock().unwrap().clone())
    }

    async fn user_streak(&self, user_id: &str) -> Result<StreakSummary, ApiError> {
        self.record(format!("GET /users/{user_id}/streak"));
        self.streak
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| Self::not_seeded("streak"))
    }
}
