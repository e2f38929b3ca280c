use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::{
    middlewares::RequireJWT,
    models::{ApiResponse, ErrorCode, attendance::requests::MyAttendanceParams},
};

/// 学生查看自己在班级中的考勤历史
pub async fn my_attendance_history(
    service: &AttendanceService,
    request: &HttpRequest,
    class_id: i64,
    query: MyAttendanceParams,
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

    student_attendance_history(service, request, class_id, uid, query).await
}

/// 查看指定学生在班级中的考勤历史
pub async fn student_attendance_history(
    service: &AttendanceService,
    request: &HttpRequest,
    class_id: i64,
    student_id: i64,
    query: MyAttendanceParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .list_student_attendance_with_pagination(class_id, student_id, query.into())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Attendance history retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve attendance history: {e}"),
            )),
        ),
    }
}
