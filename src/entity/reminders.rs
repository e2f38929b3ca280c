//! 个人提醒实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reminders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub notes: Option<String>,
    pub due_at: i64,
    pub completed: bool,
    pub notified: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 数据库行转业务模型
impl Model {
    pub fn into_reminder(self) -> crate::models::reminders::entities::Reminder {
        crate::models::reminders::entities::Reminder {
            id: self.id,
            user_id: self.user_id,
            title: self.title,
            notes: self.notes,
            due_at: super::ts_to_utc(self.due_at),
            completed: self.completed,
            notified: self.notified,
            created_at: super::ts_to_utc(self.created_at),
            updated_at: super::ts_to_utc(self.updated_at),
        }
    }
}
