use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReminderService;
use crate::{
    middlewares::RequireJWT,
    models::{ApiResponse, ErrorCode, reminders::requests::CreateReminderRequest},
};

pub async fn create_reminder(
    service: &ReminderService,
    request: &HttpRequest,
    reminder_data: CreateReminderRequest,
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

    if reminder_data.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Reminder title cannot be empty",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_reminder(uid, reminder_data).await {
        Ok(reminder) => Ok(HttpResponse::Created().json(ApiResponse::success(
            reminder,
            "Reminder created successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ReminderCreationFailed,
                format!("Failed to create reminder: {e}"),
            )),
        ),
    }
}
