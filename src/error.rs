use thiserror::Error;

/// Failure taxonomy for the backend collaborator and the derived-state
/// services built on it.
///
/// Transient failures (`Timeout`, `Network`, 5xx `Api`) are surfaced to the
/// learner as non-blocking notices and never crash the surrounding view;
/// callers use [`ApiError::is_transient`] to pick the channel.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("api error: status={status}, code={code}, message={message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },
    #[error("decode error: {0}")]
    Decode(String),
    #[error("validation error: {0}")]
    Validation(String),
}

impl ApiError {
    /// 瞬时故障：重试或稍后刷新即可恢复，只弹提示不终止流程
    pub fn is_transient(&self) -> bool {
        match self {
            ApiError::Timeout | ApiError::Network(_) => true,
            ApiError::Api { status, .. } => *status >= 500,
            ApiError::Decode(_) | ApiError::Validation(_) => false,
        }
    }

    /// Short stable code for notices and structured logs.
    pub fn code(&self) -> &str {
        match self {
            ApiError::Timeout => "TIMEOUT",
            ApiError::Network(_) => "NETWORK",
            ApiError::Api { code, .. } => code,
            ApiError::Decode(_) => "DECODE",
            ApiError::Validation(_) => "VALIDATION",
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            ApiError::Timeout
        } else if value.is_decode() {
            ApiError::Decode(value.to_string())
        } else {
            ApiError::Network(value.to_string())
        }
    }
}
