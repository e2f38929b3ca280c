use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReminderService;
use crate::{
    middlewares::RequireJWT,
    models::{ApiResponse, ErrorCode},
};

pub async fn get_reminder(
    service: &ReminderService,
    request: &HttpRequest,
    reminder_id: i64,
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

    match storage.get_reminder_by_id(uid, reminder_id).await {
        Ok(Some(reminder)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            reminder,
            "Reminder retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ReminderNotFound,
            "Reminder not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve reminder: {e}"),
            )),
        ),
    }
}
