//! 班级成员关联存储操作

use super::{SeaOrmStorage, page_window};
use crate::entity::class_members::{ActiveModel, Column, Entity as ClassMembers};
use crate::entity::classes::{Column as ClassColumn, Entity as Classes};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{ClassTrackError, Result};
use crate::models::{
    PaginationInfo,
    class_members::{
        entities::{ClassMember, ClassMemberDetail},
        requests::ClassMemberQuery,
        responses::ClassMemberListResponse,
    },
    classes::{requests::ClassListQuery, responses::ClassListResponse},
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

// 组装成员详情（成员关系 + 用户信息）
fn into_member_detail(
    member: crate::entity::class_members::Model,
    user: crate::entity::users::Model,
) -> ClassMemberDetail {
    ClassMemberDetail {
        id: member.id,
        class_id: member.class_id,
        user_id: member.user_id,
        username: user.username,
        display_name: user.display_name,
        avatar_url: user.avatar_url,
        joined_at: crate::entity::ts_to_utc(member.joined_at),
    }
}

impl SeaOrmStorage {
    /// 加入班级
    pub async fn join_class_impl(&self, user_id: i64, class_id: i64) -> Result<ClassMember> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(class_id),
            user_id: Set(user_id),
            joined_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("加入班级失败: {e}")))?;

        Ok(result.into_class_member())
    }

    /// 离开班级
    pub async fn leave_class_impl(&self, user_id: i64, class_id: i64) -> Result<bool> {
        let result = ClassMembers::delete_many()
            .filter(
                Condition::all()
                    .add(Column::UserId.eq(user_id))
                    .add(Column::ClassId.eq(class_id)),
            )
            .exec(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("离开班级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 获取用户在班级中的成员关系
    pub async fn get_class_member_by_user_id_and_class_id_impl(
        &self,
        user_id: i64,
        class_id: i64,
    ) -> Result<Option<ClassMember>> {
        let result = ClassMembers::find()
            .filter(
                Condition::all()
                    .add(Column::UserId.eq(user_id))
                    .add(Column::ClassId.eq(class_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("查询班级成员失败: {e}")))?;

        Ok(result.map(|m| m.into_class_member()))
    }

    /// 获取班级成员详情（带用户信息）
    pub async fn get_class_member_detail_impl(
        &self,
        class_id: i64,
        user_id: i64,
    ) -> Result<Option<ClassMemberDetail>> {
        let result = ClassMembers::find()
            .filter(
                Condition::all()
                    .add(Column::ClassId.eq(class_id))
                    .add(Column::UserId.eq(user_id)),
            )
            .find_also_related(Users)
            .one(&self.db)
            .await
            .map_err(|e| ClassTrackError::database_operation(format!("查询班级成员失败: {e}")))?;

        Ok(result.and_then(|(member, user)| user.map(|u| into_member_detail(member, u))))
    }

    /// 分页列出班级成员（带用户信息）
    pub async fn list_class_members_with_pagination_impl(
        &self,
        class_id: i64,
        query: ClassMemberQuery,
    ) -> Result<ClassMemberListResponse> {
        let (page, size) = page_window(query.page, query.size);

        // find_also_related 返回 SelectTwo，分页只能在这里展开做
        let mut select = ClassMembers::find()
            .filter(Column::ClassId.eq(class_id))
            .find_also_related(Users);

        // 按用户名或显示名称搜索
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(UserColumn::Username.contains(&escaped))
                    .add(UserColumn::DisplayName.contains(&escaped)),
            );
        }

        // 排序
        let select = select.order_by_desc(Column::JoinedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            ClassTrackError::database_operation(format!("查询班级成员总数失败: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            ClassTrackError::database_operation(format!("查询班级成员页数失败: {e}"))
        })?;

        let members = paginator.fetch_page(page - 1).await.map_err(|e| {
            ClassTrackError::database_operation(format!("查询班级成员列表失败: {e}"))
        })?;

        Ok(ClassMemberListResponse {
            items: members
                .into_iter()
                .filter_map(|(member, user)| user.map(|u| into_member_detail(member, u)))
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 列出班级全部成员的用户 ID
    pub async fn list_class_member_user_ids_impl(&self, class_id: i64) -> Result<Vec<i64>> {
        let ids: Vec<i64> = ClassMembers::find()
            .filter(Column::ClassId.eq(class_id))
            .select_only()
            .column(Column::UserId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                ClassTrackError::database_operation(format!("查询班级成员ID失败: {e}"))
            })?;

        Ok(ids)
    }

    /// 分页列出用户所在的班级
    pub async fn list_user_classes_with_pagination_impl(
        &self,
        user_id: i64,
        query: ClassListQuery,
    ) -> Result<ClassListResponse> {
        let (page, size) = page_window(query.page, query.size);

        // 先取用户加入的班级 ID
        let class_ids: Vec<i64> = ClassMembers::find()
            .filter(Column::UserId.eq(user_id))
            .select_only()
            .column(Column::ClassId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| {
                ClassTrackError::database_operation(format!("查询用户班级关联失败: {e}"))
            })?;

        if class_ids.is_empty() {
            return Ok(ClassListResponse {
                items: vec![],
                pagination: PaginationInfo {
                    page: page as i64,
                    page_size: size as i64,
                    total: 0,
                    total_pages: 0,
                },
            });
        }

        let mut select = Classes::find().filter(ClassColumn::Id.is_in(class_ids));

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(ClassColumn::ClassName.contains(&escaped));
        }

        select = select.order_by_desc(ClassColumn::CreatedAt);

        let (classes, pagination) = self.fetch_page_with_info(select, page, size, "班级").await?;

        Ok(ClassListResponse {
            items: classes.into_iter().map(|m| m.into_class()).collect(),
            pagination,
        })
    }
}
