use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UserService;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{requests::CreateUserRequest, responses::UserResponse},
};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple, validate_username};

// 各数据库的唯一约束报错文案不同，挑公共子串判断
fn is_duplicate_key(message: &str) -> bool {
    message.contains("UNIQUE constraint failed") || message.contains("duplicate key")
}

pub async fn create_user(
    service: &UserService,
    mut user_data: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_username(&user_data.username) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }

    if let Err(msg) = validate_email(&user_data.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }

    // 管理员建号同样走密码强度校验
    if let Err(msg) = validate_password_simple(&user_data.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserPasswordInvalid, msg)));
    }

    user_data.password = match hash_password(&user_data.password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to hash password: {e}"),
                )),
            );
        }
    };

    let storage = service.get_storage(request);

    match storage.create_user(user_data).await {
        Ok(user) => Ok(HttpResponse::Created().json(ApiResponse::success(
            UserResponse { user },
            "User created successfully",
        ))),
        Err(e) => {
            let msg = format!("Could not create user: {e}");
            error!("{}", msg);
            if is_duplicate_key(&msg) {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::UserAlreadyExists,
                    "Username or email is already registered",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::UserCreationFailed, msg)))
            }
        }
    }
}
