//! 班级事件实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub class_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub starts_at: i64,
    pub ends_at: Option<i64>,
    pub created_by: i64,
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
        from = "Column::CreatedBy",
        to = "super::users::Column::Id"
    )]
    Creator,
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 数据库行转业务模型
impl Model {
    pub fn into_event(self) -> crate::models::events::entities::Event {
        crate::models::events::entities::Event {
            id: self.id,
            class_id: self.class_id,
            title: self.title,
            description: self.description,
            location: self.location,
            starts_at: super::ts_to_utc(self.starts_at),
            ends_at: self.ends_at.map(super::ts_to_utc),
            created_by: self.created_by,
            created_at: super::ts_to_utc(self.created_at),
            updated_at: super::ts_to_utc(self.updated_at),
        }
    }
}
