use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::AttendanceService;
use crate::{
    middlewares::RequireJWT,
    models::{ApiResponse, ErrorCode, attendance::requests::RecordAttendanceRequest},
};

pub async fn record_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
    class_id: i64,
    record: RecordAttendanceRequest,
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

    // 不允许为未来日期登记考勤
    let today = chrono::Utc::now().date_naive();
    if record.date > today {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::AttendanceDateInvalid,
            "Cannot record attendance for a future date",
        )));
    }

    let storage = service.get_storage(request);

    // 被登记的学生必须是班级成员
    match storage
        .get_class_member_by_user_id_and_class_id(record.student_id, class_id)
        .await
    {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::NotAClassMember,
                "Student is not a member of this class",
            )));
        }
        Err(e) => {
            error!("Error getting class membership: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::AttendanceRecordFailed,
                    "Failed to get class membership",
                )),
            );
        }
    }

    match storage.upsert_attendance(class_id, uid, record).await {
        Ok(attendance) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            attendance,
            "Attendance recorded successfully",
        ))),
        Err(e) => {
            error!("Error recording attendance: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::AttendanceRecordFailed,
                    "Failed to record attendance",
                )),
            )
        }
    }
}
