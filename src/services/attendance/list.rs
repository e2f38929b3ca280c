use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::models::{
    ApiResponse, ErrorCode,
    attendance::{requests::AttendanceListParams, responses::AttendanceListResponse},
};

pub async fn list_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    class_id: i64,
    query: AttendanceListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 缺省查当天
    let date = query.date.unwrap_or_else(|| chrono::Utc::now().date_naive());

    match storage.list_attendance_by_date(class_id, date).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AttendanceListResponse { date, items },
            "Attendance list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve attendance list: {e}"),
            )),
        ),
    }
}
