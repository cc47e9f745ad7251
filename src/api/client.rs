use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::ApiError;

use super::types::{
    ApiEnvelope, ErrorBody, GradeResult, ProgressDoc, ProgressUpdateRequest,
    ProgressUpdateResponse, QuestDoc, StreakSummary, SubmissionRecord, SubmissionRequest,
};
use super::PracticeApi;

/// Production [`PracticeApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpApi {
    pub fn new(config: &ApiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::unwrap_envelope(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::unwrap_envelope(response).await
    }

    async fn unwrap_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            let raw = response.text().await.unwrap_or_default();
            return Err(classify_error_body(status, &raw));
        }
        let envelope: ApiEnvelope<T> = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(envelope.data)
    }
}

/// Map a non-2xx response to the error taxonomy. The backend sends a
/// structured `{ success, code, message }` body; anything else (proxy pages,
/// truncated replies) degrades to the raw text.
fn classify_error_body(status: u16, raw: &str) -> ApiError {
    match serde_json::from_str::<ErrorBody>(raw) {
        Ok(body) => ApiError::Api {
            status,
            code: body.code.unwrap_or_else(|| "API_ERROR".to_string()),
            message: body.message.unwrap_or_default(),
        },
        Err(_) => ApiError::Api {
            status,
            code: "API_ERROR".to_string(),
            message: raw.trim().to_string(),
        },
    }
}

#[async_trait]
impl PracticeApi for HttpApi {
    async fn fetch_quest(&self, quest_id: &str) -> Result<QuestDoc, ApiError> {
        self.get_json(&format!("/quests/{quest_id}")).await
    }

    async fn fetch_progress(&self, quest_id: &str) -> Result<ProgressDoc, ApiError> {
        self.get_json(&format!("/quests/progress/{quest_id}")).await
    }

    async fn update_progress(
        &self,
        request: &ProgressUpdateRequest,
    ) -> Result<ProgressUpdateResponse, ApiError> {
        self.post_json("/quests/progress", request).await
    }

    async fn submit(&self, request: &SubmissionRequest) -> Result<GradeResult, ApiError> {
        self.post_json("/submissions", request).await
    }

    async fn problem_submissions(
        &self,
        problem_id: &str,
    ) -> Result<Vec<SubmissionRecord>, ApiError> {
        self.get_json(&format!("/submissions/problem/{problem_id}"))
            .await
    }

    async fn user_streak(&self, user_id: &str) -> Result<StreakSummary, ApiError> {
        self.get_json(&format!("/users/{user_id}/streak")).await
    }
}
