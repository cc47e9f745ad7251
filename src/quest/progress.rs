use std::collections::HashSet;

use serde::Serialize;

use crate::api::types::ProgressDoc;

use super::model::{Node, Quest};

/// Derived per-node state. Never stored; always recomputed from the
/// progress record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    Locked,
    Active,
    Completed,
}

/// A learner's progress through one quest. Owned by the backend and
/// replaced wholesale from its responses; the client never merges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestProgress {
    pub quest_id: String,
    pub completed_nodes: HashSet<u32>,
    pub solved_problems: HashSet<String>,
    pub active_node: u32,
    pub stars: u32,
    pub chests_opened: HashSet<u32>,
}

impl From<ProgressDoc> for QuestProgress {
    fn from(doc: ProgressDoc) -> Self {
        Self {
            quest_id: doc.quest_id,
            completed_nodes: doc.completed_nodes.into_iter().collect(),
            solved_problems: doc.solved_problems.into_iter().collect(),
            active_node: doc.active_node,
            stars: doc.stars,
            chests_opened: doc.chests_opened.into_iter().collect(),
        }
    }
}

impl QuestProgress {
    pub fn status(&self, node: &Node) -> NodeStatus {
        if self.completed_nodes.contains(&node.id) {
            NodeStatus::Completed
        } else if node.id == self.active_node {
            NodeStatus::Active
        } else {
            NodeStatus::Locked
        }
    }

    pub fn is_solved(&self, problem_id: &str) -> bool {
        self.solved_problems.contains(problem_id)
    }

    /// First unsolved problem of the node, else its first problem: resume
    /// where you left off, else replay from the start.
    pub fn resolve_target_problem<'a>(&self, node: &'a Node) -> Option<&'a str> {
        node.problem_ids
            .iter()
            .find(|id| !self.solved_problems.contains(*id))
            .or_else(|| node.problem_ids.first())
            .map(String::as_str)
    }

    /// Diagnostic: the active node exists and every predecessor in
    /// flattened order is completed. The backend owns advancement, so a
    /// violation means local and server state diverged.
    pub fn active_node_is_consistent(&self, quest: &Quest) -> bool {
        if quest.node(self.active_node).is_none() {
            return false;
        }
        quest
            .flatten()
            .take_while(|node| node.id != self.active_node)
            .all(|node| self.completed_nodes.contains(&node.id))
    }
}
