use std::sync::Arc;

use crate::api::types::{GradeResult, ProgressUpdateRequest, SubmissionRequest};
use crate::api::PracticeApi;
use crate::error::ApiError;
use crate::notify::Notifier;
use crate::session::Liveness;

use super::model::{NodeKind, Quest};
use super::progress::{NodeStatus, QuestProgress};

/// A resolved node selection, handed to the shell for its confirmation
/// prompt. `problem_id` is what the workspace opens once the learner
/// confirms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSelection {
    pub node_id: u32,
    pub kind: NodeKind,
    pub problem_id: String,
}

#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub grade: GradeResult,
    pub node_complete: bool,
}

/// Drives one learner's interaction with one quest against the backend
/// collaborator. Progress is server-owned: every mutation replaces the
/// local copy with what the server returned, and advancement of the active
/// node is never computed here.
pub struct QuestSession {
    api: Arc<dyn PracticeApi>,
    liveness: Liveness,
    notifier: Notifier,
    quest: Quest,
    progress: QuestProgress,
}

impl QuestSession {
    /// Fetch the quest document and the learner's progress as two
    /// overlapping requests. Progress is created server-side on first view,
    /// so a fresh learner still gets a record back.
    pub async fn load(
        api: Arc<dyn PracticeApi>,
        quest_id: &str,
        liveness: Liveness,
        notifier: Notifier,
    ) -> Result<Self, ApiError> {
        let (quest_doc, progress_doc) =
            futures::try_join!(api.fetch_quest(quest_id), api.fetch_progress(quest_id))?;

        let quest = Quest::from_wire(quest_doc)?;
        let progress = QuestProgress::from(progress_doc);
        if !progress.active_node_is_consistent(&quest) {
            tracing::warn!(
                quest_id = %quest.id,
                active_node = progress.active_node,
                "Active node inconsistent with completed set, trusting server state"
            );
        }

        Ok(Self {
            api,
            liveness,
            notifier,
            quest,
            progress,
        })
    }

    pub fn quest(&self) -> &Quest {
        &self.quest
    }

    pub fn progress(&self) -> &QuestProgress {
        &self.progress
    }

    /// A click on a node. Locked, unknown, and problem-less nodes resolve
    /// to `None`: no prompt, no navigation, diagnostic log only.
    pub fn select_node(&self, node_id: u32) -> Option<NodeSelection> {
        let Some(node) = self.quest.node(node_id) else {
            tracing::debug!(quest_id = %self.quest.id, node_id, "Selection ignored: unknown node");
            return None;
        };
        if self.progress.status(node) == NodeStatus::Locked {
            tracing::debug!(quest_id = %self.quest.id, node_id, "Selection ignored: node locked");
            return None;
        }
        let Some(problem_id) = self.progress.resolve_target_problem(node) else {
            tracing::debug!(
                quest_id = %self.quest.id,
                node_id,
                "Selection ignored: node has no problems"
            );
            return None;
        };
        Some(NodeSelection {
            node_id: node.id,
            kind: node.kind,
            problem_id: problem_id.to_string(),
        })
    }

    /// Submit the learner's answer for a problem reached via `node_id`.
    ///
    /// Grading always runs first and its failure is the operation's
    /// failure. The quest-progress update is a best-effort secondary
    /// effect: when it fails the verdict already shown stands, the failure
    /// is logged, and a transient notice is published.
    pub async fn submit_answer(
        &mut self,
        node_id: u32,
        problem_id: &str,
        answer: &str,
    ) -> Result<SubmitOutcome, ApiError> {
        let request = SubmissionRequest {
            problem_id: problem_id.to_string(),
            answer: answer.to_string(),
        };
        let grade = self.api.submit(&request).await?;

        if !grade.correct {
            return Ok(SubmitOutcome {
                grade,
                node_complete: false,
            });
        }

        let update = ProgressUpdateRequest::node(&self.quest.id, node_id, problem_id);
        let updated = self.api.update_progress(&update).await;
        match updated {
            Ok(response) => {
                let node_complete = response.node_complete;
                self.apply_progress(QuestProgress::from(response.progress));
                Ok(SubmitOutcome {
                    grade,
                    node_complete,
                })
            }
            Err(error) => {
                tracing::warn!(
                    quest_id = %self.quest.id,
                    node_id,
                    problem_id,
                    error = %error,
                    "Progress update failed after graded submission"
                );
                self.notifier.warning(
                    "QUEST_PROGRESS_UPDATE_FAILED",
                    "Your answer was recorded, but quest progress could not be updated. \
                     It will catch up on the next refresh.",
                );
                Ok(SubmitOutcome {
                    grade,
                    node_complete: false,
                })
            }
        }
    }

    /// Re-read progress from the backend. Used after external changes
    /// (another tab or device) and after a failed progress update.
    pub async fn refresh_progress(&mut self) -> Result<(), ApiError> {
        let doc = self.api.fetch_progress(&self.quest.id).await?;
        self.apply_progress(QuestProgress::from(doc));
        Ok(())
    }

    fn apply_progress(&mut self, next: QuestProgress) {
        if !self.liveness.is_live() {
            tracing::debug!(
                quest_id = %self.quest.id,
                "Discarding progress response for a torn-down session"
            );
            return;
        }
        if !next.active_node_is_consistent(&self.quest) {
            tracing::warn!(
                quest_id = %self.quest.id,
                active_node = next.active_node,
                "Server progress has inconsistent active node"
            );
        }
        // 已解题集合只增不减；变小说明与服务器状态错位，但仍以服务器为准
        if next.solved_problems.len() < self.progress.solved_problems.len() {
            tracing::warn!(
                quest_id = %self.quest.id,
                "Server progress lost solved problems, applying anyway"
            );
        }
        self.progress = next;
    }
}
