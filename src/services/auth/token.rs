use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::require_jwt::RequireJWT;
use crate::models::auth::responses::{
    RefreshTokenResponse, TokenVerificationResponse, UserInfoResponse,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::jwt::JwtUtils;

use super::AuthService;

pub async fn handle_refresh_token(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(refresh_token) = JwtUtils::extract_refresh_token_from_cookie(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Missing refresh token, please login",
        )));
    };

    match JwtUtils::refresh_access_token(&refresh_token) {
        Ok(new_access_token) => {
            let response = RefreshTokenResponse {
                access_token: new_access_token,
                expires_in: service.get_config().jwt.access_token_expiry,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                response,
                "Access token refreshed",
            )))
        }
        Err(e) => {
            tracing::error!("Token refresh failed: {}", e);

            // 无效的 refresh token 连 cookie 一起清掉
            Ok(HttpResponse::Unauthorized()
                .cookie(JwtUtils::create_empty_refresh_token_cookie())
                .json(ApiResponse::error_empty(
                    ErrorCode::Unauthorized,
                    "Session expired or invalid, please login again",
                )))
        }
    }
}

/// 能走到这里说明 RequireJWT 已经验过 token
pub async fn handle_verify_token(
    _service: &AuthService,
    _request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        TokenVerificationResponse { is_valid: true },
        "Access token is valid",
    )))
}

pub async fn handle_get_user(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_user_claims(request) {
        Some(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserInfoResponse { user },
            "Current user retrieved successfully",
        ))),
        None => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized: no authenticated user",
        ))),
    }
}
