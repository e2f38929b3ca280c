use serde::Serialize;
use ts_rs::TS;

use super::entities::Reminder;
use crate::models::PaginationInfo;

/// 提醒列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/reminder.ts")]
pub struct ReminderListResponse {
    pub items: Vec<Reminder>,
    pub pagination: PaginationInfo,
}
