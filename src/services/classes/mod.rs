pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::classes::entities::Class;
use crate::models::classes::requests::{ClassQueryParams, CreateClassRequest, UpdateClassRequest};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 取班级，不存在或查询失败时直接给出响应
pub(crate) async fn load_class(
    storage: &Arc<dyn Storage>,
    class_id: i64,
) -> Result<Class, HttpResponse> {
    match storage.get_class_by_id(class_id).await {
        Ok(Some(class)) => Ok(class),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassNotFound,
            "Class not found",
        ))),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to load class: {e}"),
            )),
        ),
    }
}

/// 班级管理操作的归属校验，管理员或班主任教师放行
pub(crate) fn ensure_class_owner(
    role: Option<UserRole>,
    uid: i64,
    class: &Class,
    denial: &'static str,
) -> Result<(), HttpResponse> {
    match role {
        Some(UserRole::Admin) => Ok(()),
        Some(UserRole::Teacher) if class.teacher_id == uid => Ok(()),
        _ => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::ClassPermissionDenied,
            denial,
        ))),
    }
}

pub struct ClassService;

impl ClassService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        super::storage_from_request(request)
    }

    pub async fn list_classes(
        &self,
        request: &HttpRequest,
        query: ClassQueryParams,
    ) -> ActixResult<HttpResponse> {
        list::list_classes(self, request, query).await
    }

    pub async fn create_class(
        &self,
        req: &HttpRequest,
        class_data: CreateClassRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_class(self, req, class_data).await
    }

    pub async fn get_class(&self, req: &HttpRequest, class_id: i64) -> ActixResult<HttpResponse> {
        get::get_class(self, req, class_id).await
    }

    /// 凭加入码预览班级
    pub async fn get_class_by_code(
        &self,
        req: &HttpRequest,
        code: String,
    ) -> ActixResult<HttpResponse> {
        get::get_class_by_code(self, req, code).await
    }

    pub async fn update_class(
        &self,
        req: &HttpRequest,
        class_id: i64,
        update_data: UpdateClassRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_class(self, req, class_id, update_data).await
    }

    pub async fn delete_class(
        &self,
        req: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_class(self, req, class_id).await
    }
}
