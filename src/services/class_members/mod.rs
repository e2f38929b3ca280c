pub mod get;
pub mod join;
pub mod leave;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::class_members::requests::{ClassMemberListParams, JoinClassRequest};
use crate::storage::Storage;

pub struct ClassMemberService;

impl ClassMemberService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        super::storage_from_request(request)
    }

    // 使用加入码加入班级
    pub async fn join_class(
        &self,
        req: &HttpRequest,
        class_id: i64,
        join_data: JoinClassRequest,
    ) -> ActixResult<HttpResponse> {
        join::join_class(self, req, class_id, join_data).await
    }

    // 列出班级成员花名册
    pub async fn list_class_members(
        &self,
        req: &HttpRequest,
        class_id: i64,
        query: ClassMemberListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_class_members(self, req, class_id, query).await
    }

    // 获取班级成员详情
    pub async fn get_class_member(
        &self,
        req: &HttpRequest,
        class_id: i64,
        user_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_class_member(self, req, class_id, user_id).await
    }

    // 退出班级或移除成员
    pub async fn remove_class_member(
        &self,
        req: &HttpRequest,
        class_id: i64,
        user_id: i64,
    ) -> ActixResult<HttpResponse> {
        leave::remove_class_member(self, req, class_id, user_id).await
    }
}
