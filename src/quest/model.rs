use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::api::types::{NodeDoc, QuestDoc, SectionDoc};
use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Regular problem group.
    Level,
    /// Bonus reward node.
    Chest,
    /// Hidden-content node, revealed on reach.
    Mystery,
}

/// An atomic step in a quest's progression graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: u32,
    pub kind: NodeKind,
    pub problem_ids: Vec<String>,
}

impl Node {
    /// 一次性归一化：新的多题数组优先，旧的单题字段包成单元素列表
    fn from_wire(doc: NodeDoc) -> Self {
        let problem_ids = match (doc.problem_ids, doc.problem_id) {
            (Some(ids), _) if !ids.is_empty() => ids,
            (_, Some(id)) => vec![id],
            _ => Vec::new(),
        };
        Self {
            id: doc.id,
            kind: doc.kind,
            problem_ids,
        }
    }

    /// The problem immediately after `current` in this node's ordered list,
    /// or `None` if `current` is last or not part of the node. Pure lookup.
    pub fn next_problem(&self, current: &str) -> Option<&str> {
        let index = self.problem_ids.iter().position(|id| id == current)?;
        self.problem_ids.get(index + 1).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub title: String,
    pub nodes: Vec<Node>,
}

/// A quest: ordered sections of ordered nodes. Node ids are unique within
/// the quest; the flattened section/node order defines progression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub id: String,
    pub title: String,
    pub sections: Vec<Section>,
}

impl Quest {
    /// Convert the wire document into the domain model. Legacy problem
    /// fields are normalized here, once; nothing downstream looks at the
    /// singular field again.
    pub fn from_wire(doc: QuestDoc) -> Result<Self, ApiError> {
        let quest = Self {
            id: doc.id,
            title: doc.title,
            sections: doc.sections.into_iter().map(Section::from_wire).collect(),
        };

        let mut seen = HashSet::new();
        for node in quest.flatten() {
            if !seen.insert(node.id) {
                return Err(ApiError::Validation(format!(
                    "duplicate node id {} in quest {}",
                    node.id, quest.id
                )));
            }
        }
        Ok(quest)
    }

    /// Nodes in progression order: section order, then node order.
    pub fn flatten(&self) -> impl Iterator<Item = &Node> {
        self.sections.iter().flat_map(|section| section.nodes.iter())
    }

    pub fn node(&self, id: u32) -> Option<&Node> {
        self.flatten().find(|node| node.id == id)
    }

    pub fn first_node(&self) -> Option<&Node> {
        self.flatten().next()
    }
}

impl Section {
    fn from_wire(doc: SectionDoc) -> Self {
        Self {
            title: doc.title,
            nodes: doc.nodes.into_iter().map(Node::from_wire).collect(),
        }
    }
}
