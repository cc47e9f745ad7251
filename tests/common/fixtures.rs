use chrono::{DateTime, NaiveDate, Utc};

use practice_core::api::types::{
    NodeDoc, ProgressDoc, ProgressUpdateResponse, QuestDoc, SectionDoc, StreakSummary,
    SubmissionRecord,
};
use practice_core::quest::model::NodeKind;

pub const QUEST_ID: &str = "q-mech-101";

/// Three-node quest: two levels then a bonus chest. Node 2 is the
/// multi-problem one used by the target-resolution scenarios; node 3 also
/// carries a legacy singular `problemId`.
pub fn three_node_quest() -> QuestDoc {
    QuestDoc {
        id: QUEST_ID.to_string(),
        title: "Mechanics I".to_string(),
        sections: vec![
            SectionDoc {
                title: "Kinematics".to_string(),
                nodes: vec![
                    NodeDoc {
                        id: 1,
                        kind: NodeKind::Level,
                        problem_ids: Some(vec!["p-1".to_string()]),
                        problem_id: None,
                    },
                    NodeDoc {
                        id: 2,
                        kind: NodeKind::Level,
                        problem_ids: Some(vec![
                            "p-2".to_string(),
                            "p-3".to_string(),
                            "p-4".to_string(),
                        ]),
                        problem_id: None,
                    },
                ],
            },
            SectionDoc {
                title: "Bonus".to_string(),
                nodes: vec![NodeDoc {
                    id: 3,
                    kind: NodeKind::Chest,
                    problem_ids: None,
                    problem_id: Some("p-bonus".to_string()),
                }],
            },
        ],
    }
}

pub fn progress_at(active: u32, completed: &[u32], solved: &[&str]) -> ProgressDoc {
    ProgressDoc {
        quest_id: QUEST_ID.to_string(),
        completed_nodes: completed.to_vec(),
        solved_problems: solved.iter().map(|s| s.to_string()).collect(),
        active_node: active,
        stars: completed.len() as u32,
        chests_opened: Vec::new(),
    }
}

pub fn update_response(node_complete: bool, progress: ProgressDoc) -> ProgressUpdateResponse {
    ProgressUpdateResponse {
        node_complete,
        progress,
    }
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at_noon(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(12, 0, 0).unwrap().and_utc()
}

pub fn submission(id: &str, problem_id: &str, solved_at: Option<DateTime<Utc>>) -> SubmissionRecord {
    SubmissionRecord {
        id: id.to_string(),
        problem_id: problem_id.to_string(),
        correct: Some(true),
        solved_at,
    }
}

pub fn streak_with_history(current: u32, max: u32, history: Vec<DateTime<Utc>>) -> StreakSummary {
    StreakSummary {
        current_streak: current,
        max_streak: max,
        history,
    }
}
