use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::attendance::requests::{
    AttendanceListParams, AttendanceSummaryParams, MyAttendanceParams, RecordAttendanceRequest,
};
use crate::services::AttendanceService;
use crate::utils::SafeClassIdI64;

use crate::define_safe_i64_extractor;

// 考勤明细路径带学生 ID，负数一律挡掉
define_safe_i64_extractor!(SafeStudentIdI64, "student_id");

static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

pub async fn record_attendance(
    req: HttpRequest,
    path: SafeClassIdI64,
    record: web::Json<RecordAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .record_attendance(&req, path.0, record.into_inner())
        .await
}

pub async fn list_attendance(
    req: HttpRequest,
    path: SafeClassIdI64,
    query: web::Query<AttendanceListParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .list_attendance(&req, path.0, query.into_inner())
        .await
}

pub async fn my_attendance_history(
    req: HttpRequest,
    path: SafeClassIdI64,
    query: web::Query<MyAttendanceParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .my_attendance_history(&req, path.0, query.into_inner())
        .await
}

pub async fn student_attendance_history(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    student_id: SafeStudentIdI64,
    query: web::Query<MyAttendanceParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .student_attendance_history(&req, class_id.0, student_id.0, query.into_inner())
        .await
}

pub async fn attendance_summary(
    req: HttpRequest,
    path: SafeClassIdI64,
    query: web::Query<AttendanceSummaryParams>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .attendance_summary(&req, path.0, query.into_inner())
        .await
}

pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes/{class_id}/attendance")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::post()
                            .to(record_attendance)
                            // 班主任教师或管理员记录考勤
                            .wrap(middlewares::RequireClassAccess::teach()),
                    )
                    .route(
                        web::get()
                            .to(list_attendance)
                            // 按日期查看班级考勤名单
                            .wrap(middlewares::RequireClassAccess::teach()),
                    ),
            )
            .service(
                // 学生查看自己的考勤历史
                web::resource("/me").route(
                    web::get()
                        .to(my_attendance_history)
                        .wrap(middlewares::RequireClassAccess::member()),
                ),
            )
            .service(
                // 按状态汇总班级考勤
                web::resource("/summary").route(
                    web::get()
                        .to(attendance_summary)
                        .wrap(middlewares::RequireClassAccess::teach()),
                ),
            )
            .service(
                // 班主任教师查看指定学生的考勤历史
                web::resource("/students/{student_id}").route(
                    web::get()
                        .to(student_attendance_history)
                        .wrap(middlewares::RequireClassAccess::teach()),
                ),
            ),
    );
}
