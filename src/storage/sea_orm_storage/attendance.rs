//! 考勤存储操作

use super::{SeaOrmStorage, page_window};
use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Set,
};

use crate::entity::attendance::{ActiveModel, Column, Entity as AttendanceRecords};
use crate::errors::{ClassTrackError, Result};
use crate::models::attendance::{
    entities::{Attendance, AttendanceStatus},
    requests::{AttendanceHistoryQuery, RecordAttendanceRequest},
    responses::{AttendanceHistoryResponse, AttendanceSummaryResponse},
};

// 数据库中考勤日期的存储格式
const DATE_FORMAT: &str = "%Y-%m-%d";

impl SeaOrmStorage {
    /// 记录考勤，同一 (班级, 学生, 日期) 已有记录时覆盖
    pub async fn upsert_attendance_impl(
        &self,
        class_id: i64,
        recorded_by: i64,
        record: RecordAttendanceRequest,
    ) -> Result<Attendance> {
        let now = chrono::Utc::now().timestamp();
        let date_str = record.date.format(DATE_FORMAT).to_string();

        // 查找当天已有的记录
        let existing = AttendanceRecords::find()
            .filter(
                Condition::all()
                    .add(Column::ClassId.eq(class_id))
                    .add(Column::StudentId.eq(record.student_id))
                    .add(Column::Date.eq(date_str.as_str())),
            )
            .one(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("查询考勤记录失败: {e}")))?;

        let result = match existing {
            Some(model) => {
                let update = ActiveModel {
                    id: Set(model.id),
                    status: Set(record.status.to_string()),
                    note: Set(record.note),
                    recorded_by: Set(recorded_by),
                    updated_at: Set(now),
                    ..Default::default()
                };

                update.update(&self.db).await.map_err(|e| {
                    ClassTrackError::database_operation(format!("更新考勤记录失败: {e}"))
                })?
            }
            None => {
                let insert = ActiveModel {
                    class_id: Set(class_id),
                    student_id: Set(record.student_id),
                    date: Set(date_str),
                    status: Set(record.status.to_string()),
                    note: Set(record.note),
                    recorded_by: Set(recorded_by),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };

                insert.insert(&self.db).await.map_err(|e| {
                    ClassTrackError::database_operation(format!("创建考勤记录失败: {e}"))
                })?
            }
        };

        Ok(result.into_attendance())
    }

    /// 按日期列出班级考勤记录
    pub async fn list_attendance_by_date_impl(
        &self,
        class_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<Attendance>> {
        let date_str = date.format(DATE_FORMAT).to_string();

        let records = AttendanceRecords::find()
            .filter(
                Condition::all()
                    .add(Column::ClassId.eq(class_id))
                    .add(Column::Date.eq(date_str.as_str())),
            )
            .order_by_asc(Column::StudentId)
            .all(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("查询考勤记录失败: {e}")))?;

        Ok(records.into_iter().map(|m| m.into_attendance()).collect())
    }

    /// 分页列出某个学生在班级中的考勤历史
    pub async fn list_student_attendance_with_pagination_impl(
        &self,
        class_id: i64,
        student_id: i64,
        query: AttendanceHistoryQuery,
    ) -> Result<AttendanceHistoryResponse> {
        let (page, size) = page_window(query.page, query.size);

        let mut select = AttendanceRecords::find().filter(
            Condition::all()
                .add(Column::ClassId.eq(class_id))
                .add(Column::StudentId.eq(student_id)),
        );

        // 日期区间筛选，YYYY-MM-DD 字符串的字典序即时间序
        if let Some(from) = query.from {
            select = select.filter(Column::Date.gte(from.format(DATE_FORMAT).to_string()));
        }

        if let Some(to) = query.to {
            select = select.filter(Column::Date.lte(to.format(DATE_FORMAT).to_string()));
        }

        select = select.order_by_desc(Column::Date);

        let (records, pagination) = self.fetch_page_with_info(select, page, size, "考勤").await?;

        Ok(AttendanceHistoryResponse {
            items: records.into_iter().map(|m| m.into_attendance()).collect(),
            pagination,
        })
    }

    /// 统计班级在日期区间内的考勤汇总
    pub async fn get_attendance_summary_impl(
        &self,
        class_id: i64,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<AttendanceSummaryResponse> {
        let mut select = AttendanceRecords::find().filter(Column::ClassId.eq(class_id));

        if let Some(from_date) = from {
            select = select.filter(Column::Date.gte(from_date.format(DATE_FORMAT).to_string()));
        }

        if let Some(to_date) = to {
            select = select.filter(Column::Date.lte(to_date.format(DATE_FORMAT).to_string()));
        }

        // 按状态聚合计数
        let counts: Vec<(String, i64)> = select
            .select_only()
            .column(Column::Status)
            .column_as(Column::Id.count(), "count")
            .group_by(Column::Status)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("统计考勤失败: {e}")))?;

        let mut summary = AttendanceSummaryResponse {
            class_id,
            from,
            to,
            present: 0,
            absent: 0,
            late: 0,
            excused: 0,
            total: 0,
        };

        for (status, count) in counts {
            match status.parse::<AttendanceStatus>() {
                Ok(AttendanceStatus::Present) => summary.present = count,
                Ok(AttendanceStatus::Absent) => summary.absent = count,
                Ok(AttendanceStatus::Late) => summary.late = count,
                Ok(AttendanceStatus::Excused) => summary.excused = count,
                Err(_) => continue,
            }
            summary.total += count;
        }

        Ok(summary)
    }
}
