pub mod count;
pub mod delete;
pub mod list;
pub mod read;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::notifications::requests::NotificationListParams;
use crate::storage::Storage;

pub struct NotificationService;

impl NotificationService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        super::storage_from_request(request)
    }

    // 列出当前用户的通知
    pub async fn list_notifications(
        &self,
        req: &HttpRequest,
        query: NotificationListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_notifications(self, req, query).await
    }

    // 当前用户的未读通知数量
    pub async fn unread_count(&self, req: &HttpRequest) -> ActixResult<HttpResponse> {
        count::unread_count(self, req).await
    }

    // 标记单条通知为已读
    pub async fn mark_read(
        &self,
        req: &HttpRequest,
        notification_id: i64,
    ) -> ActixResult<HttpResponse> {
        read::mark_read(self, req, notification_id).await
    }

    // 标记全部通知为已读
    pub async fn mark_all_read(&self, req: &HttpRequest) -> ActixResult<HttpResponse> {
        read::mark_all_read(self, req).await
    }

    // 删除通知
    pub async fn delete_notification(
        &self,
        req: &HttpRequest,
        notification_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_notification(self, req, notification_id).await
    }
}
