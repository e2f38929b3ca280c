//! 个人提醒存储操作

use super::{SeaOrmStorage, page_window};
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use crate::entity::reminders::{ActiveModel, Column, Entity as Reminders};
use crate::errors::{ClassTrackError, Result};
use crate::models::reminders::{
    entities::{Reminder, ReminderFilter},
    requests::{CreateReminderRequest, ReminderListQuery, UpdateReminderRequest},
    responses::ReminderListResponse,
};

impl SeaOrmStorage {
    /// 创建提醒
    pub async fn create_reminder_impl(
        &self,
        user_id: i64,
        reminder: CreateReminderRequest,
    ) -> Result<Reminder> {
        let now = chrono::Utc::now().timestamp();

        let insert = ActiveModel {
            user_id: Set(user_id),
            title: Set(reminder.title),
            notes: Set(reminder.notes),
            due_at: Set(reminder.due_at),
            completed: Set(false),
            notified: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = insert
            .insert(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("创建提醒失败: {e}")))?;

        Ok(result.into_reminder())
    }

    /// 查询用户的单个提醒
    pub async fn get_reminder_by_id_impl(
        &self,
        user_id: i64,
        reminder_id: i64,
    ) -> Result<Option<Reminder>> {
        let reminder = Reminders::find_by_id(reminder_id)
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("查询提醒失败: {e}")))?;

        Ok(reminder.map(|m| m.into_reminder()))
    }

    /// 分页列出用户的提醒
    pub async fn list_reminders_with_pagination_impl(
        &self,
        user_id: i64,
        query: ReminderListQuery,
    ) -> Result<ReminderListResponse> {
        let (page, size) = page_window(query.page, query.size);

        let mut select = Reminders::find().filter(Column::UserId.eq(user_id));

        // 完成状态筛选，缺省只看未完成
        match query.filter.unwrap_or_default() {
            ReminderFilter::Pending => {
                select = select.filter(Column::Completed.eq(false));
            }
            ReminderFilter::Completed => {
                select = select.filter(Column::Completed.eq(true));
            }
            ReminderFilter::All => {}
        }

        // 按到期时间升序，最先到期的排在前面
        select = select.order_by_asc(Column::DueAt);

        let (reminders, pagination) =
            self.fetch_page_with_info(select, page, size, "提醒").await?;

        Ok(ReminderListResponse {
            items: reminders.into_iter().map(|m| m.into_reminder()).collect(),
            pagination,
        })
    }

    /// 更新提醒，提醒必须属于指定用户
    pub async fn update_reminder_impl(
        &self,
        user_id: i64,
        reminder_id: i64,
        update: UpdateReminderRequest,
    ) -> Result<Option<Reminder>> {
        let Some(current) = Reminders::find_by_id(reminder_id)
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("查询提醒失败: {e}")))?
        else {
            return Ok(None);
        };

        let now = chrono::Utc::now().timestamp();

        // 从现有行转 ActiveModel，只有重新 Set 的列会进 UPDATE
        let mut model = current.into_active_model();
        model.updated_at = Set(now);

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(notes) = update.notes {
            model.notes = Set(Some(notes));
        }

        if let Some(due_at) = update.due_at {
            model.due_at = Set(due_at);
            // 改到未来的到期时间重新参与定时扫描
            if due_at > now {
                model.notified = Set(false);
            }
        }

        if let Some(completed) = update.completed {
            model.completed = Set(completed);
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("更新提醒失败: {e}")))?;

        Ok(Some(updated.into_reminder()))
    }

    /// 删除提醒
    pub async fn delete_reminder_impl(&self, user_id: i64, reminder_id: i64) -> Result<bool> {
        let result = Reminders::delete_many()
            .filter(
                Condition::all()
                    .add(Column::Id.eq(reminder_id))
                    .add(Column::UserId.eq(user_id)),
            )
            .exec(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("删除提醒失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出到期且尚未通知的提醒，供定时任务消费
    pub async fn list_due_reminders_impl(
        &self,
        now: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<Reminder>> {
        let reminders = Reminders::find()
            .filter(
                Condition::all()
                    .add(Column::Completed.eq(false))
                    .add(Column::Notified.eq(false))
                    .add(Column::DueAt.lte(now.timestamp())),
            )
            .order_by_asc(Column::DueAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("查询到期提醒失败: {e}")))?;

        Ok(reminders.into_iter().map(|m| m.into_reminder()).collect())
    }

    /// 标记提醒已通知
    pub async fn mark_reminder_notified_impl(&self, reminder_id: i64) -> Result<bool> {
        let result = Reminders::update_many()
            .col_expr(Column::Notified, sea_orm::sea_query::Expr::value(true))
            .filter(Column::Id.eq(reminder_id))
            .exec(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("标记提醒已通知失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
