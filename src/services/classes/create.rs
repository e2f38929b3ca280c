use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ClassService;
use crate::middlewares::RequireJWT;
use crate::models::classes::requests::CreateClassRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub async fn create_class(
    service: &ClassService,
    request: &HttpRequest,
    class_data: CreateClassRequest,
) -> ActixResult<HttpResponse> {
    let Some(uid) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized: no authenticated user",
        )));
    };
    let role = RequireJWT::extract_user_role(request);
    let storage = service.get_storage(request);

    // 先定下班级归属的教师，再创建
    let teacher_id = match resolve_owning_teacher(role, uid, &class_data, &storage).await {
        Ok(id) => id,
        Err(resp) => return Ok(resp),
    };

    // 加入码由存储层生成
    match storage.create_class(teacher_id, class_data).await {
        Ok(class) => {
            info!("Class {} created by user {}", class.class_name, uid);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(class, "Class created")))
        }
        Err(e) => Ok(handle_class_create_error(&e.to_string())),
    }
}

/// 解析班级归属的教师 ID，管理员须显式指定，教师只能是自己
async fn resolve_owning_teacher(
    role: Option<UserRole>,
    uid: i64,
    class_data: &CreateClassRequest,
    storage: &Arc<dyn Storage>,
) -> Result<i64, HttpResponse> {
    match role {
        Some(UserRole::Admin) => {
            let Some(teacher_id) = class_data.teacher_id else {
                return Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "teacher_id is required when creating a class as admin",
                )));
            };

            // 归属者必须真实存在且是教师
            match storage.get_user_by_id(teacher_id).await {
                Ok(Some(user)) if user.role == UserRole::Teacher => Ok(teacher_id),
                Ok(Some(_)) => Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ClassPermissionDenied,
                    "teacher_id must reference a teacher account",
                ))),
                Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::UserNotFound,
                    "Teacher account not found",
                ))),
                Err(e) => {
                    error!("Teacher lookup failed: {}", e);
                    Err(
                        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            "Failed to look up the teacher account",
                        )),
                    )
                }
            }
        }
        Some(UserRole::Teacher) => {
            // 不填 teacher_id 时默认为自己
            if class_data.teacher_id.is_some_and(|id| id != uid) {
                return Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::ClassPermissionDenied,
                    "Cannot create a class owned by another teacher",
                )));
            }
            Ok(uid)
        }
        _ => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::ClassPermissionDenied,
            "Only teachers and admins can create classes",
        ))),
    }
}

fn handle_class_create_error(e: &str) -> HttpResponse {
    let msg = format!("Could not create class: {e}");
    error!("{}", msg);
    // 从数据库错误文本识别违反的约束，SQLite 和 PostgreSQL 的措辞不同
    if msg.contains("UNIQUE constraint failed") || msg.contains("duplicate key") {
        HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::ClassAlreadyExists,
            "Class name already taken",
        ))
    } else if msg.contains("FOREIGN KEY constraint failed") {
        HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ClassCreationFailed,
            "Owning teacher does not exist",
        ))
    } else {
        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::ClassCreationFailed,
            msg,
        ))
    }
}
