use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 班级日程事件
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
pub struct Event {
    pub id: i64,
    pub class_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_at: chrono::DateTime<chrono::Utc>,
    // 结束时间可缺省，存在时不得早于开始时间
    pub ends_at: Option<chrono::DateTime<chrono::Utc>>,
    // 创建人（教师）ID
    pub created_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
