use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::RegisterRequest,
    users::{entities::UserRole, requests::CreateUserRequest},
};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple, validate_username};

use super::AuthService;

pub async fn handle_register(
    service: &AuthService,
    register_request: RegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 1. 格式校验
    if let Err(msg) = validate_username(&register_request.username) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }
    if let Err(msg) = validate_email(&register_request.email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }
    if let Err(msg) = validate_password_simple(&register_request.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserPasswordInvalid, msg)));
    }

    let storage = service.get_storage(request);

    // 2. 用户名、邮箱查重
    match storage.get_user_by_username(&register_request.username).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::UserNameAlreadyExists,
                "Username is taken",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::RegisterFailed,
                    format!("Registration failed: {e}"),
                )),
            );
        }
    }
    match storage.get_user_by_email(&register_request.email).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::UserEmailAlreadyExists,
                "Email is already registered",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::RegisterFailed,
                    format!("Registration failed: {e}"),
                )),
            );
        }
    }

    // 3. 哈希密码
    let password_hash = match hash_password(&register_request.password) {
        Ok(hash) => hash,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::RegisterFailed,
                    format!("Failed to hash password: {e}"),
                )),
            );
        }
    };

    // 4. 创建用户，自助注册的账号固定为学生角色
    let create_request = CreateUserRequest {
        username: register_request.username,
        email: register_request.email,
        password: password_hash,
        role: UserRole::Student,
        display_name: register_request.display_name,
        avatar_url: None,
    };

    match storage.create_user(create_request).await {
        Ok(user) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(user, "Registration successful")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::RegisterFailed,
                format!("Registration failed: {e}"),
            )),
        ),
    }
}
