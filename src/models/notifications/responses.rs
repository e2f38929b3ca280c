//! 通知接口的响应模型

use serde::Serialize;
use ts_rs::TS;

use super::entities::Notification;
use crate::models::common::pagination::PaginationInfo;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct NotificationListResponse {
    pub items: Vec<Notification>,
    pub pagination: PaginationInfo,
}

/// 未读角标数
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct UnreadCountResponse {
    pub unread_count: i64,
}

/// 全部标记已读的结果，附带本次实际标记的条数
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct MarkAllReadResponse {
    pub marked_count: i64,
}
