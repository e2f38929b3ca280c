use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{LoginRequest, LoginResponse},
    users::entities::UserStatus,
};
use crate::utils::jwt;
use crate::utils::password::verify_password;

use super::AuthService;

/// 用户名或邮箱加密码登录，签发令牌对
pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    let user = match storage
        .get_user_by_username_or_email(&login_request.username)
        .await
    {
        Ok(Some(user)) => user,
        // 账号不存在和密码错误返回同一个提示
        Ok(None) => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::AuthFailed,
                "Incorrect username or password",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Login error: {e}"),
                )),
            );
        }
    };

    if !verify_password(&login_request.password, &user.password_hash) {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Incorrect username or password",
        )));
    }

    // 非活跃账号不允许登录
    if user.status != UserStatus::Active {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Account is disabled",
        )));
    }

    let _ = storage.update_last_login(user.id).await;

    // 勾选记住我时延长 refresh token 有效期
    let remember = login_request
        .remember_me
        .then(|| chrono::Duration::seconds(config.jwt.refresh_token_remember_me_expiry));

    match user.generate_token_pair(remember) {
        Ok(token_pair) => {
            tracing::info!("User {} logged in", user.username);

            let refresh_cookie =
                jwt::JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token);

            let response = LoginResponse {
                access_token: token_pair.access_token,
                expires_in: config.jwt.access_token_expiry,
                user,
                issued_at: chrono::Utc::now(),
            };

            Ok(HttpResponse::Ok()
                .cookie(refresh_cookie)
                .json(ApiResponse::success(response, "Logged in successfully")))
        }
        Err(e) => {
            tracing::error!("Token pair generation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed: could not issue token",
                )),
            )
        }
    }
}
