use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NotificationService;
use crate::{
    middlewares::RequireJWT,
    models::{ApiResponse, ErrorCode, notifications::requests::NotificationListParams},
};

pub async fn list_notifications(
    service: &NotificationService,
    request: &HttpRequest,
    query: NotificationListParams,
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

    match storage
        .list_notifications_with_pagination(uid, query.into())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Notification list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve notification list: {e}"),
            )),
        ),
    }
}
