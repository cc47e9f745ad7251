/// 后端 API 默认地址（开发环境）
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

/// 网络请求默认超时（秒）
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 15;

/// 活动窗口跨度：一个日历年
pub const ACTIVITY_WINDOW_MONTHS: u32 = 12;

/// 每周天数（热力图列对齐用）
pub const DAYS_PER_WEEK: usize = 7;

/// 进度更新请求的节点类型字面量
pub const PROGRESS_UPDATE_TYPE_NODE: &str = "node";

/// 通知广播通道默认容量
pub const DEFAULT_NOTIFY_CAPACITY: usize = 64;
