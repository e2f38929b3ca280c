//! 用户通知存储操作

use super::{SeaOrmStorage, page_window};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

use crate::entity::notifications::{ActiveModel, Column, Entity as Notifications};
use crate::errors::{ClassTrackError, Result};
use crate::models::notifications::{
    entities::Notification,
    requests::{CreateNotificationRequest, NotificationListQuery},
    responses::NotificationListResponse,
};

// 把创建请求转换为写库模型
fn into_active_model(notification: CreateNotificationRequest, now: i64) -> ActiveModel {
    ActiveModel {
        user_id: Set(notification.user_id),
        notification_type: Set(notification.notification_type),
        title: Set(notification.title),
        content: Set(notification.content),
        reference_type: Set(notification.reference_type),
        reference_id: Set(notification.reference_id),
        is_read: Set(false),
        created_at: Set(now),
        ..Default::default()
    }
}

impl SeaOrmStorage {
    /// 创建单条通知
    pub async fn create_notification_impl(
        &self,
        notification: CreateNotificationRequest,
    ) -> Result<Notification> {
        let now = chrono::Utc::now().timestamp();

        let result = into_active_model(notification, now)
            .insert(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("创建通知失败: {e}")))?;

        Ok(result.into_notification())
    }

    /// 批量创建通知，返回写入条数
    pub async fn create_notifications_batch_impl(
        &self,
        notifications: Vec<CreateNotificationRequest>,
    ) -> Result<u64> {
        if notifications.is_empty() {
            return Ok(0);
        }

        let now = chrono::Utc::now().timestamp();
        let count = notifications.len() as u64;

        let models = notifications
            .into_iter()
            .map(|n| into_active_model(n, now))
            .collect::<Vec<_>>();

        Notifications::insert_many(models)
            .exec(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("批量创建通知失败: {e}")))?;

        Ok(count)
    }

    /// 分页列出用户的通知
    pub async fn list_notifications_with_pagination_impl(
        &self,
        user_id: i64,
        query: NotificationListQuery,
    ) -> Result<NotificationListResponse> {
        let (page, size) = page_window(query.page, query.size);

        let mut select = Notifications::find().filter(Column::UserId.eq(user_id));

        // 只看未读
        if query.unread_only.unwrap_or(false) {
            select = select.filter(Column::IsRead.eq(false));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let (notifications, pagination) =
            self.fetch_page_with_info(select, page, size, "通知").await?;

        Ok(NotificationListResponse {
            items: notifications
                .into_iter()
                .map(|m| m.into_notification())
                .collect(),
            pagination,
        })
    }

    /// 统计用户未读通知数量
    pub async fn count_unread_notifications_impl(&self, user_id: i64) -> Result<u64> {
        let count = Notifications::find()
            .filter(
                Condition::all()
                    .add(Column::UserId.eq(user_id))
                    .add(Column::IsRead.eq(false)),
            )
            .count(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("统计未读通知失败: {e}")))?;

        Ok(count)
    }

    /// 标记单条通知已读
    pub async fn mark_notification_read_impl(
        &self,
        user_id: i64,
        notification_id: i64,
    ) -> Result<bool> {
        let result = Notifications::update_many()
            .col_expr(Column::IsRead, sea_orm::sea_query::Expr::value(true))
            .filter(
                Condition::all()
                    .add(Column::Id.eq(notification_id))
                    .add(Column::UserId.eq(user_id)),
            )
            .exec(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("标记通知已读失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 标记用户全部通知已读，返回受影响条数
    pub async fn mark_all_notifications_read_impl(&self, user_id: i64) -> Result<u64> {
        let result = Notifications::update_many()
            .col_expr(Column::IsRead, sea_orm::sea_query::Expr::value(true))
            .filter(
                Condition::all()
                    .add(Column::UserId.eq(user_id))
                    .add(Column::IsRead.eq(false)),
            )
            .exec(&self.db)
            .await
            .map_err(|e| {
                ClassTrackError::database_operation(format!("标记全部通知已读失败: {e}"))
            })?;

        Ok(result.rows_affected)
    }

    /// 删除通知
    pub async fn delete_notification_impl(
        &self,
        user_id: i64,
        notification_id: i64,
    ) -> Result<bool> {
        let result = Notifications::delete_many()
            .filter(
                Condition::all()
                    .add(Column::Id.eq(notification_id))
                    .add(Column::UserId.eq(user_id)),
            )
            .exec(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("删除通知失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
