use serde::Serialize;
use ts_rs::TS;

/// 健康检查响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// 系统状态响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/system.ts")]
pub struct SystemStatusResponse {
    pub name: String,        // 系统名称
    pub version: String,     // 版本号
    pub environment: String, // 运行环境
    pub uptime_seconds: i64, // 运行时长（秒）
    pub started_at: chrono::DateTime<chrono::Utc>,
}
