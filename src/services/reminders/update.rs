use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReminderService;
use crate::{
    middlewares::RequireJWT,
    models::{ApiResponse, ErrorCode, reminders::requests::UpdateReminderRequest},
};

pub async fn update_reminder(
    service: &ReminderService,
    request: &HttpRequest,
    reminder_id: i64,
    update_data: UpdateReminderRequest,
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

    if let Some(title) = &update_data.title
        && title.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Reminder title cannot be empty",
        )));
    }

    let storage = service.get_storage(request);

    match storage.update_reminder(uid, reminder_id, update_data).await {
        Ok(Some(reminder)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            reminder,
            "Reminder updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ReminderNotFound,
            "Reminder not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ReminderUpdateFailed,
                format!("Failed to update reminder: {e}"),
            )),
        ),
    }
}
