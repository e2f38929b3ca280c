use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ClassService, load_class};
use crate::middlewares::RequireJWT;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let class = match load_class(&storage, class_id).await {
        Ok(class) => class,
        Err(resp) => return Ok(resp),
    };

    // 加入码只有班主任教师和管理员可见
    let uid = RequireJWT::extract_user_id(request);
    let can_see_code = uid.is_some_and(|id| id == class.teacher_id)
        || RequireJWT::extract_user_role(request) == Some(UserRole::Admin);
    let class = if can_see_code {
        class
    } else {
        class.without_join_code()
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        class,
        "Class retrieved successfully",
    )))
}

/// 凭加入码预览班级，返回时抹掉加入码
pub async fn get_class_by_code(
    service: &ClassService,
    request: &HttpRequest,
    code: String,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_class_by_code(&code).await {
        Ok(Some(class)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            class.without_join_code(),
            "Class retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassJoinCodeInvalid,
            "Class not found or join code is invalid",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to load class: {e}"),
            )),
        ),
    }
}
