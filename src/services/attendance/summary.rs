use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::models::{ApiResponse, ErrorCode, attendance::requests::AttendanceSummaryParams};

pub async fn attendance_summary(
    service: &AttendanceService,
    request: &HttpRequest,
    class_id: i64,
    query: AttendanceSummaryParams,
) -> ActixResult<HttpResponse> {
    // from/to 都给出时要求区间合法
    if let (Some(from), Some(to)) = (query.from, query.to)
        && from > to
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::AttendanceDateInvalid,
            "Invalid date range: from is later than to",
        )));
    }

    let storage = service.get_storage(request);

    match storage
        .get_attendance_summary(class_id, query.from, query.to)
        .await
    {
        Ok(summary) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            summary,
            "Attendance summary retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve attendance summary: {e}"),
            )),
        ),
    }
}
