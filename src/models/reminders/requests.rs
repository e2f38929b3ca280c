use super::entities::ReminderFilter;
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 创建提醒请求，到期时间为 Unix 时间戳（秒）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/reminder.ts")]
pub struct CreateReminderRequest {
    pub title: String,
    pub notes: Option<String>,
    pub due_at: i64,
}

// 更新提醒请求
//
// 把 due_at 改到未来会同时重置 notified，让定时任务重新生成到期通知
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/reminder.ts")]
pub struct UpdateReminderRequest {
    pub title: Option<String>,
    pub notes: Option<String>,
    pub due_at: Option<i64>,
    pub completed: Option<bool>,
}

// 提醒查询参数（来自HTTP请求）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/reminder.ts")]
pub struct ReminderListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub filter: Option<ReminderFilter>,
}

// 提醒列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/reminder.ts")]
pub struct ReminderListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub filter: Option<ReminderFilter>,
}

impl From<ReminderListParams> for ReminderListQuery {
    fn from(params: ReminderListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            filter: params.filter,
        }
    }
}
