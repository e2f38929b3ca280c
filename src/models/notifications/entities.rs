use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 用户通知
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    // 通知类型，如 reminder_due / class_event
    pub notification_type: String,
    pub title: String,
    pub content: Option<String>,
    // 关联对象类型与 ID，如 reminder / event / class
    pub reference_type: Option<String>,
    pub reference_id: Option<i64>,
    pub is_read: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Notification {
    pub const TYPE_REMINDER_DUE: &'static str = "reminder_due";
    pub const TYPE_CLASS_EVENT: &'static str = "class_event";

    pub const REF_REMINDER: &'static str = "reminder";
    pub const REF_EVENT: &'static str = "event";
    pub const REF_CLASS: &'static str = "class";
}
