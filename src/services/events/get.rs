use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EventService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_event(
    service: &EventService,
    request: &HttpRequest,
    class_id: i64,
    event_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_event_by_id(class_id, event_id).await {
        Ok(Some(event)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            event,
            "Event retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EventNotFound,
            "Event not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve event: {e}"),
            )),
        ),
    }
}
