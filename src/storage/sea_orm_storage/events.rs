//! 班级事件存储操作

use super::{SeaOrmStorage, page_window};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};

use crate::entity::events::{ActiveModel, Column, Entity as Events};
use crate::errors::{ClassTrackError, Result};
use crate::models::events::{
    entities::Event,
    requests::{CreateEventRequest, EventListQuery, UpdateEventRequest},
    responses::EventListResponse,
};

impl SeaOrmStorage {
    /// 创建班级事件
    pub async fn create_event_impl(
        &self,
        class_id: i64,
        created_by: i64,
        event: CreateEventRequest,
    ) -> Result<Event> {
        let now = chrono::Utc::now().timestamp();

        let insert = ActiveModel {
            class_id: Set(class_id),
            title: Set(event.title),
            description: Set(event.description),
            location: Set(event.location),
            starts_at: Set(event.starts_at),
            ends_at: Set(event.ends_at),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = insert
            .insert(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("创建事件失败: {e}")))?;

        Ok(result.into_event())
    }

    /// 查询班级内的单个事件
    pub async fn get_event_by_id_impl(
        &self,
        class_id: i64,
        event_id: i64,
    ) -> Result<Option<Event>> {
        let event = Events::find_by_id(event_id)
            .filter(Column::ClassId.eq(class_id))
            .one(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("查询事件失败: {e}")))?;

        Ok(event.map(|m| m.into_event()))
    }

    /// 分页列出班级事件
    pub async fn list_events_with_pagination_impl(
        &self,
        class_id: i64,
        query: EventListQuery,
    ) -> Result<EventListResponse> {
        let (page, size) = page_window(query.page, query.size);

        let mut select = Events::find().filter(Column::ClassId.eq(class_id));

        // 时间窗口筛选
        if let Some(from) = query.from {
            select = select.filter(Column::StartsAt.gte(from));
        }

        if let Some(to) = query.to {
            select = select.filter(Column::StartsAt.lte(to));
        }

        // 按开始时间升序，最近的日程排在前面
        select = select.order_by_asc(Column::StartsAt);

        let (events, pagination) = self.fetch_page_with_info(select, page, size, "事件").await?;

        Ok(EventListResponse {
            items: events.into_iter().map(|m| m.into_event()).collect(),
            pagination,
        })
    }

    /// 更新班级事件，事件必须属于指定班级
    pub async fn update_event_impl(
        &self,
        class_id: i64,
        event_id: i64,
        update: UpdateEventRequest,
    ) -> Result<Option<Event>> {
        let Some(current) = Events::find_by_id(event_id)
            .filter(Column::ClassId.eq(class_id))
            .one(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("查询事件失败: {e}")))?
        else {
            return Ok(None);
        };

        // 从现有行转 ActiveModel，只有重新 Set 的列会进 UPDATE
        let mut model = current.into_active_model();
        model.updated_at = Set(chrono::Utc::now().timestamp());

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(location) = update.location {
            model.location = Set(Some(location));
        }

        if let Some(starts_at) = update.starts_at {
            model.starts_at = Set(starts_at);
        }

        if let Some(ends_at) = update.ends_at {
            model.ends_at = Set(Some(ends_at));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("更新事件失败: {e}")))?;

        Ok(Some(updated.into_event()))
    }

    /// 删除班级事件
    pub async fn delete_event_impl(&self, class_id: i64, event_id: i64) -> Result<bool> {
        let result = Events::delete_many()
            .filter(
                Condition::all()
                    .add(Column::Id.eq(event_id))
                    .add(Column::ClassId.eq(class_id)),
            )
            .exec(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("删除事件失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
