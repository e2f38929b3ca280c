pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::reminders::requests::{
    CreateReminderRequest, ReminderListParams, UpdateReminderRequest,
};
use crate::storage::Storage;

pub struct ReminderService;

impl ReminderService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        super::storage_from_request(request)
    }

    // 创建提醒
    pub async fn create_reminder(
        &self,
        req: &HttpRequest,
        reminder_data: CreateReminderRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_reminder(self, req, reminder_data).await
    }

    // 列出当前用户的提醒
    pub async fn list_reminders(
        &self,
        req: &HttpRequest,
        query: ReminderListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_reminders(self, req, query).await
    }

    // 获取提醒详情
    pub async fn get_reminder(
        &self,
        req: &HttpRequest,
        reminder_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_reminder(self, req, reminder_id).await
    }

    // 更新提醒
    pub async fn update_reminder(
        &self,
        req: &HttpRequest,
        reminder_id: i64,
        update_data: UpdateReminderRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_reminder(self, req, reminder_id, update_data).await
    }

    // 删除提醒
    pub async fn delete_reminder(
        &self,
        req: &HttpRequest,
        reminder_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_reminder(self, req, reminder_id).await
    }
}
