pub mod history;
pub mod list;
pub mod record;
pub mod summary;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::attendance::requests::{
    AttendanceListParams, AttendanceSummaryParams, MyAttendanceParams, RecordAttendanceRequest,
};
use crate::storage::Storage;

pub struct AttendanceService;

impl AttendanceService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        super::storage_from_request(request)
    }

    // 登记考勤，同一学生同一天重复登记会覆盖
    pub async fn record_attendance(
        &self,
        req: &HttpRequest,
        class_id: i64,
        record: RecordAttendanceRequest,
    ) -> ActixResult<HttpResponse> {
        record::record_attendance(self, req, class_id, record).await
    }

    // 按日期查看班级考勤
    pub async fn list_attendance(
        &self,
        req: &HttpRequest,
        class_id: i64,
        query: AttendanceListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_attendance(self, req, class_id, query).await
    }

    // 学生查看自己的考勤历史
    pub async fn my_attendance_history(
        &self,
        req: &HttpRequest,
        class_id: i64,
        query: MyAttendanceParams,
    ) -> ActixResult<HttpResponse> {
        history::my_attendance_history(self, req, class_id, query).await
    }

    // 教师查看指定学生的考勤历史
    pub async fn student_attendance_history(
        &self,
        req: &HttpRequest,
        class_id: i64,
        student_id: i64,
        query: MyAttendanceParams,
    ) -> ActixResult<HttpResponse> {
        history::student_attendance_history(self, req, class_id, student_id, query).await
    }

    // 班级考勤统计
    pub async fn attendance_summary(
        &self,
        req: &HttpRequest,
        class_id: i64,
        query: AttendanceSummaryParams,
    ) -> ActixResult<HttpResponse> {
        summary::attendance_summary(self, req, class_id, query).await
    }
}
