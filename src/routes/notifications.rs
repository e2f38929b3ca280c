use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::notifications::requests::NotificationListParams;
use crate::services::NotificationService;
use crate::utils::SafeNotificationIdI64;

static NOTIFICATION_SERVICE: Lazy<NotificationService> = Lazy::new(NotificationService::new_lazy);

pub async fn list_notifications(
    req: HttpRequest,
    query: web::Query<NotificationListParams>,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .list_notifications(&req, query.into_inner())
        .await
}

pub async fn unread_count(req: HttpRequest) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE.unread_count(&req).await
}

pub async fn mark_read(
    req: HttpRequest,
    notification_id: SafeNotificationIdI64,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE.mark_read(&req, notification_id.0).await
}

pub async fn mark_all_read(req: HttpRequest) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE.mark_all_read(&req).await
}

pub async fn delete_notification(
    req: HttpRequest,
    notification_id: SafeNotificationIdI64,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .delete_notification(&req, notification_id.0)
        .await
}

// 通知只属于当前登录用户，路径不带用户 ID
pub fn configure_notifications_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/notifications")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_notifications))
            .route("/unread-count", web::get().to(unread_count))
            .route("/read-all", web::put().to(mark_all_read))
            .route("/{notification_id}/read", web::put().to(mark_read))
            .route("/{notification_id}", web::delete().to(delete_notification)),
    );
}
