use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NotificationService;
use crate::{
    middlewares::RequireJWT,
    models::{ApiResponse, ErrorCode, notifications::responses::UnreadCountResponse},
};

pub async fn unread_count(
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

    match storage.count_unread_notifications(uid).await {
        Ok(count) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UnreadCountResponse {
                unread_count: count as i64,
            },
            "Unread count retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to count unread notifications: {e}"),
            )),
        ),
    }
}
