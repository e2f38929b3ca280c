//! 考勤记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attendance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub class_id: i64,
    pub student_id: i64,
    // 日期，格式 YYYY-MM-DD
    pub date: String,
    pub status: String,
    pub note: Option<String>,
    pub recorded_by: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::classes::Entity",
        from = "Column::ClassId",
        to = "super::classes::Column::Id"
    )]
    Class,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::StudentId",
        to = "super::users::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::RecordedBy",
        to = "super::users::Column::Id"
    )]
    Recorder,
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 数据库行转业务模型
impl Model {
    pub fn into_attendance(self) -> crate::models::attendance::entities::Attendance {
        use crate::models::attendance::entities::{Attendance, AttendanceStatus};
        use chrono::NaiveDate;

        Attendance {
            id: self.id,
            class_id: self.class_id,
            student_id: self.student_id,
            date: NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").unwrap_or_default(),
            status: self
                .status
                .parse::<AttendanceStatus>()
                .unwrap_or(AttendanceStatus::Absent),
            note: self.note,
            recorded_by: self.recorded_by,
            created_at: super::ts_to_utc(self.created_at),
            updated_at: super::ts_to_utc(self.updated_at),
        }
    }
}
