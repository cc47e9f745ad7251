pub mod model;
pub mod progress;
pub mod service;

pub use model::{Node, NodeKind, Quest, Section};
pub use progress::{NodeStatus, QuestProgress};
pub use service::{NodeSelection, QuestSession, SubmitOutcome};
