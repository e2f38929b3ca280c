use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 创建通知请求（内部使用，由事件创建与定时任务触发）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct CreateNotificationRequest {
    pub user_id: i64,
    pub notification_type: String,
    pub title: String,
    pub content: Option<String>,
    pub reference_type: Option<String>,
    pub reference_id: Option<i64>,
}

// 通知查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct NotificationListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub unread_only: Option<bool>,
}

// 通知列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct NotificationListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub unread_only: Option<bool>,
}

impl From<NotificationListParams> for NotificationListQuery {
    fn from(params: NotificationListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            unread_only: params.unread_only,
        }
    }
}
