//! 用户存储操作

use super::{SeaOrmStorage, page_window};
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{ClassTrackError, Result};
use crate::models::users::{
    entities::{User, UserStatus},
    requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
    responses::UserListResponse,
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, IntoActiveModel, PaginatorTrait,
    QueryFilter, QueryOrder, Select, Set,
};

/// 套用列表筛选条件，关键字搜索加角色、状态，按创建时间倒序
fn apply_user_filters(mut select: Select<Users>, query: &UserListQuery) -> Select<Users> {
    if let Some(ref search) = query.search
        && !search.trim().is_empty()
    {
        let escaped = escape_like_pattern(search.trim());
        select = select.filter(
            Condition::any()
                .add(Column::Username.contains(&escaped))
                .add(Column::Email.contains(&escaped))
                .add(Column::DisplayName.contains(&escaped)),
        );
    }

    if let Some(ref role) = query.role {
        select = select.filter(Column::Role.eq(role.as_str()));
    }

    if let Some(ref status) = query.status {
        select = select.filter(Column::Status.eq(status.as_str()));
    }

    select.order_by_desc(Column::CreatedAt)
}

impl SeaOrmStorage {
    /// 按条件取单个用户
    async fn find_one_user(&self, condition: Condition) -> Result<Option<User>> {
        let found = Users::find()
            .filter(condition)
            .one(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(found.map(|m| m.into_user()))
    }

    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        let created = ActiveModel {
            username: Set(req.username),
            email: Set(req.email),
            password_hash: Set(req.password),
            role: Set(req.role.to_string()),
            status: Set(UserStatus::Active.to_string()),
            display_name: Set(req.display_name),
            avatar_url: Set(req.avatar_url),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| ClassTrackError::database_operation(format!("创建用户失败: {e}")))?;

        Ok(created.into_user())
    }

    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        self.find_one_user(Condition::all().add(Column::Id.eq(id)))
            .await
    }

    pub async fn get_user_by_username_impl(&self, username: &str) -> Result<Option<User>> {
        self.find_one_user(Condition::all().add(Column::Username.eq(username)))
            .await
    }

    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        self.find_one_user(Condition::all().add(Column::Email.eq(email)))
            .await
    }

    /// 登录标识同时匹配用户名和邮箱
    pub async fn get_user_by_username_or_email_impl(
        &self,
        identifier: &str,
    ) -> Result<Option<User>> {
        self.find_one_user(
            Condition::any()
                .add(Column::Username.eq(identifier))
                .add(Column::Email.eq(identifier)),
        )
        .await
    }

    /// 分页列出用户
    pub async fn list_users_with_pagination_impl(
        &self,
        query: UserListQuery,
    ) -> Result<UserListResponse> {
        let (page, size) = page_window(query.page, query.size);
        let select = apply_user_filters(Users::find(), &query);

        let (models, pagination) = self.fetch_page_with_info(select, page, size, "用户").await?;

        Ok(UserListResponse {
            items: models.into_iter().map(|m| m.into_user()).collect(),
            pagination,
        })
    }

    pub async fn update_last_login_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let res = Users::update_many()
            .col_expr(Column::LastLogin, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                ClassTrackError::database_operation(format!("更新最后登录时间失败: {e}"))
            })?;

        Ok(res.rows_affected > 0)
    }

    /// 更新用户信息，只写传入的字段
    pub async fn update_user_impl(
        &self,
        id: i64,
        update: UpdateUserRequest,
    ) -> Result<Option<User>> {
        let Some(current) = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("查询用户失败: {e}")))?
        else {
            return Ok(None);
        };

        // 从现有行转 ActiveModel，只有重新 Set 的列会进 UPDATE
        let mut model = current.into_active_model();
        model.updated_at = Set(chrono::Utc::now().timestamp());

        if let Some(email) = update.email {
            model.email = Set(email);
        }
        if let Some(password) = update.password {
            model.password_hash = Set(password);
        }
        if let Some(role) = update.role {
            model.role = Set(role.to_string());
        }
        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }
        if let Some(display_name) = update.display_name {
            model.display_name = Set(Some(display_name));
        }
        if let Some(avatar_url) = update.avatar_url {
            model.avatar_url = Set(Some(avatar_url));
        }

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("更新用户失败: {e}")))?;

        Ok(Some(updated.into_user()))
    }

    pub async fn delete_user_impl(&self, id: i64) -> Result<bool> {
        let res = Users::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("删除用户失败: {e}")))?;

        Ok(res.rows_affected > 0)
    }

    /// 统计用户数量，启动时用来判断是否需要种子管理员
    pub async fn count_users_impl(&self) -> Result<u64> {
        Users::find()
            .count(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("统计用户数量失败: {e}")))
    }
}
