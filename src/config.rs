use std::env;
use std::str::FromStr;

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_SECS, DEFAULT_NOTIFY_CAPACITY,
};

/// Application-start configuration. Built once and passed explicitly to the
/// pieces that need it; nothing in the crate reads the environment after
/// this returns.
#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub log_level: String,
    pub enable_file_logs: bool,
    pub log_dir: String,
    pub notify_capacity: usize,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        // .env 仅在存在时加载，缺失不算错误
        dotenvy::dotenv().ok();

        Self {
            api: ApiConfig {
                base_url: env_or("API_BASE_URL", DEFAULT_API_BASE_URL),
                timeout_secs: env_or_parse("API_TIMEOUT_SECS", DEFAULT_API_TIMEOUT_SECS),
            },
            log_level: env_or("RUST_LOG", "info"),
            enable_file_logs: env_or_bool("ENABLE_FILE_LOGS", false),
            log_dir: env_or("LOG_DIR", "./logs"),
            notify_capacity: env_or_parse("NOTIFY_CAPACITY", DEFAULT_NOTIFY_CAPACITY),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
        }
    }
}

pub fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

pub fn env_or_parse<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    match env::var(key) {
        Ok(raw) => match raw.parse::<T>() {
            Ok(v) => v,
            Err(_) => {
                tracing::warn!(
                    key,
                    value = %raw,
                    "Failed to parse env var, using default"
                );
                default
            }
        },
        Err(_) => default,
    }
}

pub fn env_or_bool(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => default,
        },
        Err(_) => default,
    }
}
