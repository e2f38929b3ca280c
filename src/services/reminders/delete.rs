use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReminderService;
use crate::{
    middlewares::RequireJWT,
    models::{ApiResponse, ErrorCode},
};

pub async fn delete_reminder(
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

    match storage.delete_reminder(uid, reminder_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Reminder deleted successfully",
        ))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ReminderNotFound,
            "Reminder not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ReminderDeleteFailed,
                format!("Failed to delete reminder: {e}"),
            )),
        ),
    }
}
