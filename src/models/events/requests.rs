use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 创建班级事件请求，时间为 Unix 时间戳（秒）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
pub struct CreateEventRequest {
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_at: i64,
    pub ends_at: Option<i64>,
}

// 更新班级事件请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_at: Option<i64>,
    pub ends_at: Option<i64>,
}

// 事件查询参数（来自HTTP请求），from/to 为时间窗口过滤
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
pub struct EventListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub from: Option<i64>,
    pub to: Option<i64>,
}

// 事件列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
pub struct EventListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub from: Option<i64>,
    pub to: Option<i64>,
}

impl From<EventListParams> for EventListQuery {
    fn from(params: EventListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            from: params.from,
            to: params.to,
        }
    }
}
