use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EventService;
use crate::models::{ApiResponse, ErrorCode, events::requests::UpdateEventRequest};

pub async fn update_event(
    service: &EventService,
    request: &HttpRequest,
    class_id: i64,
    event_id: i64,
    update_data: UpdateEventRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let existing = match storage.get_event_by_id(class_id, event_id).await {
        Ok(Some(event)) => event,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EventNotFound,
                "Event not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve event: {e}"),
                )),
            );
        }
    };

    // 校验更新后的生效时间，未提供的字段沿用原值
    let starts_at = update_data
        .starts_at
        .unwrap_or_else(|| existing.starts_at.timestamp());
    let ends_at = update_data
        .ends_at
        .or_else(|| existing.ends_at.map(|t| t.timestamp()));
    if let Some(ends_at) = ends_at
        && ends_at < starts_at
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::EventTimeInvalid,
            "Event end time cannot be earlier than start time",
        )));
    }

    match storage.update_event(class_id, event_id, update_data).await {
        Ok(Some(event)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            event,
            "Event updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EventNotFound,
            "Event not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::EventUpdateFailed,
                format!("Failed to update event: {e}"),
            )),
        ),
    }
}
