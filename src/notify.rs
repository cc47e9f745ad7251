use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;

use crate::constants::DEFAULT_NOTIFY_CAPACITY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// A transient, non-blocking notification for the learner ("toast"). The
/// shell renders and expires these; nothing in the core waits on them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub id: String,
    pub level: NoticeLevel,
    pub code: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Fan-out channel for notices. Publishing never blocks and never fails:
/// with no subscribers the notice is dropped, and a lagging subscriber only
/// loses its own backlog.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: broadcast::Sender<Notice>,
}

impl Notifier {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn subscribe(&self) -> BroadcastStream<Notice> {
        BroadcastStream::new(self.tx.subscribe())
    }

    pub fn publish(&self, level: NoticeLevel, code: &str, message: &str) {
        let notice = Notice {
            id: uuid::Uuid::new_v4().to_string(),
            level,
            code: code.to_string(),
            message: message.to_string(),
            created_at: Utc::now(),
        };
        // send 仅在无订阅者时失败，对发布方不构成错误
        let _ = self.tx.send(notice);
    }

    pub fn info(&self, code: &str, message: &str) {
        self.publish(NoticeLevel::Info, code, message);
    }

    pub fn warning(&self, code: &str, message: &str) {
        self.publish(NoticeLevel::Warning, code, message);
    }

    pub fn error(&self, code: &str, message: &str) {
        self.publish(NoticeLevel::Error, code, message);
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFY_CAPACITY)
    }
}
