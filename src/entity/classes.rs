//! classes 表，加入码全表唯一

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub teacher_id: i64,
    #[sea_orm(unique)]
    pub class_name: String,
    pub description: Option<String>,
    #[sea_orm(unique)]
    pub join_code: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::TeacherId",
        to = "super::users::Column::Id"
    )]
    Teacher,
    #[sea_orm(has_many = "super::class_members::Entity")]
    ClassMembers,
    #[sea_orm(has_many = "super::events::Entity")]
    Events,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::class_members::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassMembers.def()
    }
}

impl Related<super::events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Events.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 数据库行转业务模型
impl Model {
    pub fn into_class(self) -> crate::models::classes::entities::Class {
        crate::models::classes::entities::Class {
            id: self.id,
            class_name: self.class_name,
            description: self.description,
            teacher_id: self.teacher_id,
            join_code: Some(self.join_code),
            created_at: super::ts_to_utc(self.created_at),
            updated_at: super::ts_to_utc(self.updated_at),
        }
    }
}
