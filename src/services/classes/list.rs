use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::{
    middlewares::RequireJWT,
    models::{
        ApiResponse, ErrorCode,
        classes::{
            entities::Class,
            requests::{ClassListQuery, ClassQueryParams},
        },
        users::entities::UserRole,
    },
    storage::Storage,
};

/// 班级列表按角色收窄，管理员看全部，教师看自己的，学生看加入的
pub async fn list_classes(
    service: &ClassService,
    request: &HttpRequest,
    query: ClassQueryParams,
) -> ActixResult<HttpResponse> {
    let Some(uid) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized: no authenticated user",
        )));
    };
    let storage = service.get_storage(request);
    let mut list_query = ClassListQuery::from(query);

    match RequireJWT::extract_user_role(request) {
        Some(UserRole::Admin) => {}
        Some(UserRole::Teacher) => {
            // 教师的 teacher_id 过滤条件强制为自己
            list_query.teacher_id = Some(uid);
        }
        Some(UserRole::Student) => return list_joined_classes(&storage, uid, list_query).await,
        _ => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: unknown role",
            )));
        }
    }

    match storage.list_classes_with_pagination(list_query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Class list loaded",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to query classes: {e}"),
            )),
        ),
    }
}

/// 学生分支，只列出自己加入的班级且抹掉加入码
async fn list_joined_classes(
    storage: &Arc<dyn Storage>,
    uid: i64,
    query: ClassListQuery,
) -> ActixResult<HttpResponse> {
    match storage.list_user_classes_with_pagination(uid, query).await {
        Ok(mut response) => {
            response.items = response
                .items
                .into_iter()
                .map(Class::without_join_code)
                .collect();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                response,
                "Joined class list loaded",
            )))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to query joined classes: {e}"),
            )),
        ),
    }
}
