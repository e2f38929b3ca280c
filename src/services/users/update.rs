use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{requests::UpdateUserRequest, responses::UserResponse},
};

pub async fn update_user(
    service: &UserService,
    user_id: i64,
    mut update_data: UpdateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 改密码时入库前先哈希
    if let Some(ref password) = update_data.password {
        match crate::utils::password::hash_password(password) {
            Ok(hash) => update_data.password = Some(hash),
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to hash password: {e}"),
                    )),
                );
            }
        }
    }

    let storage = service.get_storage(request);

    match storage.update_user(user_id, update_data).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserResponse { user },
            "User updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => {
            let msg = format!("Could not update user: {e}");
            // 邮箱撞上已有账号
            if msg.contains("UNIQUE constraint failed") || msg.contains("duplicate key") {
                return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::UserAlreadyExists,
                    "Email is already registered",
                )));
            }
            Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::UserUpdateFailed, msg)))
        }
    }
}
