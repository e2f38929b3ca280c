use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassMemberService;
use crate::{
    middlewares::{RequireClassAccess, RequireJWT},
    models::{ApiResponse, ErrorCode, users::entities::UserRole},
};

/// 学生自己退出班级，或由班级教师 / 管理员移除成员
pub async fn remove_class_member(
    service: &ClassMemberService,
    request: &HttpRequest,
    class_id: i64,
    user_id: i64,
) -> ActixResult<HttpResponse> {
    let uid = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: no authenticated user",
            )));
        }
    };

    // 移除他人需要班级教师或管理员权限
    if uid != user_id {
        let role = RequireJWT::extract_user_role(request);
        let is_admin = role == Some(UserRole::Admin);
        let is_class_teacher = RequireClassAccess::extract_class(request)
            .is_some_and(|class| class.teacher_id == uid);

        if !is_admin && !is_class_teacher {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::ClassPermissionDenied,
                "Only the class teacher can remove other members",
            )));
        }
    }

    let storage = service.get_storage(request);

    match storage.leave_class(user_id, class_id).await {
        Ok(true) => {
            info!("User {} removed from class {}", user_id, class_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Member removed successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassMemberNotFound,
            "Class member not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to remove class member: {e}"),
            )),
        ),
    }
}
