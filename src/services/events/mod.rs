pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::events::requests::{CreateEventRequest, EventListParams, UpdateEventRequest};
use crate::storage::Storage;

pub struct EventService;

impl EventService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        super::storage_from_request(request)
    }

    // 创建班级事件并通知全体成员
    pub async fn create_event(
        &self,
        req: &HttpRequest,
        class_id: i64,
        event_data: CreateEventRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_event(self, req, class_id, event_data).await
    }

    // 列出班级事件
    pub async fn list_events(
        &self,
        req: &HttpRequest,
        class_id: i64,
        query: EventListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_events(self, req, class_id, query).await
    }

    // 获取班级事件详情
    pub async fn get_event(
        &self,
        req: &HttpRequest,
        class_id: i64,
        event_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_event(self, req, class_id, event_id).await
    }

    // 更新班级事件
    pub async fn update_event(
        &self,
        req: &HttpRequest,
        class_id: i64,
        event_id: i64,
        update_data: UpdateEventRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_event(self, req, class_id, event_id, update_data).await
    }

    // 删除班级事件
    pub async fn delete_event(
        &self,
        req: &HttpRequest,
        class_id: i64,
        event_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_event(self, req, class_id, event_id).await
    }
}
