//! 班级存储操作

use super::{SeaOrmStorage, page_window};
use crate::entity::classes::{ActiveModel, Column, Entity as Classes};
use crate::errors::{ClassTrackError, Result};
use crate::models::classes::{
    entities::Class,
    requests::{ClassListQuery, CreateClassRequest, UpdateClassRequest},
    responses::ClassListResponse,
};
use crate::utils::{escape_like_pattern, random_code::generate_random_code};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Select,
    Set,
};

// 加入码长度
const JOIN_CODE_LEN: usize = 8;

/// 套用列表筛选条件，教师、名称搜索，按创建时间倒序
fn apply_list_filters(mut select: Select<Classes>, query: &ClassListQuery) -> Select<Classes> {
    if let Some(teacher_id) = query.teacher_id {
        select = select.filter(Column::TeacherId.eq(teacher_id));
    }

    if let Some(ref search) = query.search
        && !search.trim().is_empty()
    {
        let escaped = escape_like_pattern(search.trim());
        select = select.filter(Column::ClassName.contains(&escaped));
    }

    select.order_by_desc(Column::CreatedAt)
}

impl SeaOrmStorage {
    /// 创建班级，加入码自动生成
    pub async fn create_class_impl(
        &self,
        teacher_id: i64,
        req: CreateClassRequest,
    ) -> Result<Class> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            teacher_id: Set(teacher_id),
            class_name: Set(req.class_name),
            description: Set(req.description),
            join_code: Set(generate_random_code(JOIN_CODE_LEN)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("创建班级失败: {e}")))?;

        Ok(result.into_class())
    }

    pub async fn get_class_by_id_impl(&self, class_id: i64) -> Result<Option<Class>> {
        let result = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_class()))
    }

    pub async fn get_class_by_code_impl(&self, join_code: &str) -> Result<Option<Class>> {
        let result = Classes::find()
            .filter(Column::JoinCode.eq(join_code))
            .one(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|m| m.into_class()))
    }

    /// 分页列出班级
    pub async fn list_classes_with_pagination_impl(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse> {
        let (page, size) = page_window(query.page, query.size);
        let select = apply_list_filters(Classes::find(), &query);
        let (models, pagination) = self.fetch_page_with_info(select, page, size, "班级").await?;

        Ok(ClassListResponse {
            items: models.into_iter().map(|m| m.into_class()).collect(),
            pagination,
        })
    }

    /// 更新班级信息，regenerate_join_code 为真时旧码立即失效
    pub async fn update_class_impl(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
    ) -> Result<Option<Class>> {
        let Some(current) = Classes::find_by_id(class_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("查询班级失败: {e}")))?
        else {
            return Ok(None);
        };

        // 从现有行转 ActiveModel，只有重新 Set 的列会进 UPDATE
        let mut model = current.into_active_model();
        model.updated_at = Set(chrono::Utc::now().timestamp());

        if let Some(class_name) = update.class_name {
            model.class_name = Set(class_name);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if update.regenerate_join_code {
            model.join_code = Set(generate_random_code(JOIN_CODE_LEN));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("更新班级失败: {e}")))?;

        Ok(Some(updated.into_class()))
    }

    pub async fn delete_class_impl(&self, class_id: i64) -> Result<bool> {
        let result = Classes::delete_by_id(class_id)
            .exec(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("删除班级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
