use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::PROGRESS_UPDATE_TYPE_NODE;
use crate::quest::model::NodeKind;

/// Success envelope every backend payload arrives in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: T,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub success: bool,
    pub code: Option<String>,
    pub message: Option<String>,
}

/// Quest document as served by `GET /quests/{id}`.
///
/// Nodes carry both the `problemIds` array and the deprecated singular
/// `problemId`; the domain model normalizes the pair once at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestDoc {
    pub id: String,
    pub title: String,
    pub sections: Vec<SectionDoc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDoc {
    pub title: String,
    pub nodes: Vec<NodeDoc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDoc {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub problem_ids: Option<Vec<String>>,
    #[serde(default)]
    pub problem_id: Option<String>,
}

/// Learner progress as served by `GET /quests/progress/{id}` and embedded in
/// progress-update responses. Owned by the backend; the client re-reads it
/// after every mutation instead of merging locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressDoc {
    pub quest_id: String,
    #[serde(default)]
    pub completed_nodes: Vec<u32>,
    #[serde(default)]
    pub solved_problems: Vec<String>,
    pub active_node: u32,
    #[serde(default)]
    pub stars: u32,
    #[serde(default)]
    pub chests_opened: Vec<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdateRequest {
    pub quest_id: String,
    pub node_id: u32,
    #[serde(rename = "type")]
    pub update_type: String,
    pub problem_id: String,
}

impl ProgressUpdateRequest {
    pub fn node(quest_id: &str, node_id: u32, problem_id: &str) -> Self {
        Self {
            quest_id: quest_id.to_string(),
            node_id,
            update_type: PROGRESS_UPDATE_TYPE_NODE.to_string(),
            problem_id: problem_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdateResponse {
    pub node_complete: bool,
    #[serde(flatten)]
    pub progress: ProgressDoc,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    pub problem_id: String,
    pub answer: String,
}

/// Grading verdict from `POST /submissions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeResult {
    pub correct: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// One past submission from `GET /submissions/problem/{id}`. `solvedAt` is
/// absent for attempts the backend never timestamped; those never count
/// toward any activity bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub id: String,
    pub problem_id: String,
    #[serde(default)]
    pub correct: Option<bool>,
    #[serde(default)]
    pub solved_at: Option<DateTime<Utc>>,
}

/// Payload of `GET /users/{id}/streak`, consumed by the calendar widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakSummary {
    pub current_streak: u32,
    pub max_streak: u32,
    #[serde(default)]
    pub history: Vec<DateTime<Utc>>,
}
