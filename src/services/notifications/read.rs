use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NotificationService;
use crate::{
    middlewares::RequireJWT,
    models::{ApiResponse, ErrorCode, notifications::responses::MarkAllReadResponse},
};

pub async fn mark_read(
    service: &NotificationService,
    request: &HttpRequest,
    notification_id: i64,
) -> ActixResult<HttpResponse> {
    let uid = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: no authenticated user",
            )));
        }
    };

    let storage = service.get_storage(request);

    match storage.mark_notification_read(uid, notification_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Notification marked as read",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotificationNotFound,
            "Notification not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::NotificationUpdateFailed,
                format!("Failed to mark notification as read: {e}"),
            )),
        ),
    }
}

pub async fn mark_all_read(
    service: &NotificationService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let uid = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: no authenticated user",
            )));
        }
    };

    let storage = service.get_storage(request);

    match storage.mark_all_notifications_read(uid).await {
        Ok(marked) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            MarkAllReadResponse {
                marked_count: marked as i64,
            },
            "All notifications marked as read",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::NotificationUpdateFailed,
                format!("Failed to mark notifications as read: {e}"),
            )),
        ),
    }
}
