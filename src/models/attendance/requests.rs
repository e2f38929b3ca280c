use super::entities::AttendanceStatus;
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 登记考勤请求，对 (班级, 学生, 日期) 做 upsert
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct RecordAttendanceRequest {
    pub student_id: i64,
    pub date: chrono::NaiveDate,
    pub status: AttendanceStatus,
    pub note: Option<String>,
}

// 按日期查询班级考勤，缺省为当天
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceListParams {
    pub date: Option<chrono::NaiveDate>,
}

// 学生查询自己的考勤历史
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct MyAttendanceParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub from: Option<chrono::NaiveDate>,
    pub to: Option<chrono::NaiveDate>,
}

// 考勤统计查询参数
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceSummaryParams {
    pub from: Option<chrono::NaiveDate>,
    pub to: Option<chrono::NaiveDate>,
}

// 考勤历史查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceHistoryQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub from: Option<chrono::NaiveDate>,
    pub to: Option<chrono::NaiveDate>,
}

impl From<MyAttendanceParams> for AttendanceHistoryQuery {
    fn from(params: MyAttendanceParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            from: params.from,
            to: params.to,
        }
    }
}
