use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::reminders::requests::{
    CreateReminderRequest, ReminderListParams, UpdateReminderRequest,
};
use crate::services::ReminderService;
use crate::utils::SafeReminderIdI64;

static REMINDER_SERVICE: Lazy<ReminderService> = Lazy::new(ReminderService::new_lazy);

pub async fn create_reminder(
    req: HttpRequest,
    reminder_data: web::Json<CreateReminderRequest>,
) -> ActixResult<HttpResponse> {
    REMINDER_SERVICE
        .create_reminder(&req, reminder_data.into_inner())
        .await
}

pub async fn list_reminders(
    req: HttpRequest,
    query: web::Query<ReminderListParams>,
) -> ActixResult<HttpResponse> {
    REMINDER_SERVICE
        .list_reminders(&req, query.into_inner())
        .await
}

pub async fn get_reminder(
    req: HttpRequest,
    reminder_id: SafeReminderIdI64,
) -> ActixResult<HttpResponse> {
    REMINDER_SERVICE.get_reminder(&req, reminder_id.0).await
}

pub async fn update_reminder(
    req: HttpRequest,
    reminder_id: SafeReminderIdI64,
    update_data: web::Json<UpdateReminderRequest>,
) -> ActixResult<HttpResponse> {
    REMINDER_SERVICE
        .update_reminder(&req, reminder_id.0, update_data.into_inner())
        .await
}

pub async fn delete_reminder(
    req: HttpRequest,
    reminder_id: SafeReminderIdI64,
) -> ActixResult<HttpResponse> {
    REMINDER_SERVICE.delete_reminder(&req, reminder_id.0).await
}

// 提醒只属于当前登录用户，路径不带用户 ID
pub fn configure_reminders_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/reminders")
            .wrap(middlewares::RequireJWT)
            .route("", web::post().to(create_reminder))
            .route("", web::get().to(list_reminders))
            .route("/{reminder_id}", web::get().to(get_reminder))
            .route("/{reminder_id}", web::put().to(update_reminder))
            .route("/{reminder_id}", web::delete().to(delete_reminder)),
    );
}
