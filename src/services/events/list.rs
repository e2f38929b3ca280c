use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EventService;
use crate::models::{ApiResponse, ErrorCode, events::requests::EventListParams};

pub async fn list_events(
    service: &EventService,
    request: &HttpRequest,
    class_id: i64,
    query: EventListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .list_events_with_pagination(class_id, query.into())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Event list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve event list: {e}"),
            )),
        ),
    }
}
