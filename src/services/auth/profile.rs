use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::auth::requests::UpdateProfileRequest;
use crate::models::users::requests::UpdateUserRequest;
use crate::models::users::responses::UserResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;
use crate::utils::validate::validate_password_simple;

use super::AuthService;

/// 当前用户改自己的资料，role 和 status 不开放
pub async fn handle_update_profile(
    service: &AuthService,
    update_data: UpdateProfileRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized: no authenticated user",
        )));
    };

    let storage = service.get_storage(request);

    // 新邮箱不能撞其他账号
    if let Some(ref email) = update_data.email
        && let Ok(Some(existing)) = storage.get_user_by_email(email).await
        && existing.id != current_user.id
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::UserEmailAlreadyExists,
            "Email is already taken by another account",
        )));
    }

    let mut hashed_password = None;
    if let Some(ref password) = update_data.password {
        if let Err(msg) = validate_password_simple(password) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::UserPasswordInvalid, msg)));
        }
        match hash_password(password) {
            Ok(hash) => hashed_password = Some(hash),
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

    let storage_update = UpdateUserRequest {
        email: update_data.email,
        password: hashed_password,
        role: None,
        status: None,
        display_name: update_data.display_name,
        avatar_url: update_data.avatar_url,
    };

    match storage.update_user(current_user.id, storage_update).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserResponse { user },
            "Profile updated successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::UserUpdateFailed,
            format!("Failed to update profile: {e}"),
        ))),
    }
}
