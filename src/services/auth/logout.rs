use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::cache::ObjectCache;
use crate::middlewares::require_jwt::user_cache_key;
use crate::models::ApiResponse;
use crate::utils::jwt::JwtUtils;

/// 处理用户登出
/// 清理缓存的用户信息，并通过设置空的 refresh_token cookie 清除客户端的登录状态
pub async fn handle_logout(request: &HttpRequest) -> ActixResult<HttpResponse> {
    // 当前 access token 对应的缓存用户立即失效
    if let Some(token) = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        && let Some(cache) = request.app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
    {
        cache.get_ref().remove(&user_cache_key(token)).await;
    }

    // 创建空的 refresh_token cookie（max_age=0 会让浏览器删除该 cookie）
    let empty_cookie = JwtUtils::create_empty_refresh_token_cookie();

    Ok(HttpResponse::Ok()
        .cookie(empty_cookie)
        .json(ApiResponse::<()>::success_empty("Logged out successfully")))
}
