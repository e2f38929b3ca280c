use serde::Serialize;
use ts_rs::TS;

use super::entities::Attendance;
use crate::models::PaginationInfo;

/// 单日班级考勤列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceListResponse {
    pub date: chrono::NaiveDate,
    pub items: Vec<Attendance>,
}

/// 学生考勤历史响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceHistoryResponse {
    pub items: Vec<Attendance>,
    pub pagination: PaginationInfo,
}

/// 班级考勤统计响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceSummaryResponse {
    pub class_id: i64,
    pub from: Option<chrono::NaiveDate>,
    pub to: Option<chrono::NaiveDate>,
    pub present: i64,
    pub absent: i64,
    pub late: i64,
    pub excused: i64,
    pub total: i64,
}
