/*!
 * JWT 认证中间件
 *
 * 校验 `Authorization: Bearer <token>`，通过后把完整的用户实体写入
 * 请求扩展，下游用 `RequireJWT::extract_user_claims` 系列方法读取。
 *
 * 用户实体按 access token 缓存，TTL 取 cache.default_ttl，
 * 登出会删掉对应缓存键让 token 立即失效。
 */

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::models::ErrorCode;
use crate::models::users::entities::{User, UserRole, UserStatus};
use crate::storage::Storage;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info};

#[derive(Clone)]
pub struct RequireJWT;

/// access token 对应的缓存用户键，登出时按同样的键删除
pub(crate) fn user_cache_key(token: &str) -> String {
    format!("auth:user:{token}")
}

fn unauthorized(message: &str) -> HttpResponse {
    super::create_error_response(StatusCode::UNAUTHORIZED, ErrorCode::Unauthorized, message)
}

fn bearer_token(req: &ServiceRequest) -> Option<&str> {
    req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
}

/// 缓存命中直接返回用户，反序列化失败时丢弃脏数据
async fn user_from_cache(cache: &Arc<dyn ObjectCache>, key: &str) -> Option<User> {
    match cache.get_raw(key).await {
        CacheResult::Found(json) => match serde_json::from_str::<User>(&json) {
            Ok(user) => Some(user),
            Err(_) => {
                cache.remove(key).await;
                None
            }
        },
        _ => None,
    }
}

async fn authenticate(req: &ServiceRequest) -> Result<User, String> {
    let token =
        bearer_token(req).ok_or_else(|| "Missing bearer token".to_string())?;

    let claims = crate::utils::jwt::JwtUtils::verify_access_token(token).map_err(|err| {
        info!("Access token rejected: {}", err);
        "Access token invalid or expired".to_string()
    })?;

    let cache = req
        .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
        .expect("Cache not found in app data")
        .get_ref()
        .clone();

    let cache_key = user_cache_key(token);
    if let Some(user) = user_from_cache(&cache, &cache_key).await {
        return Ok(user);
    }

    // 缓存未命中，回源数据库并回填
    let storage = req
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone();

    let user_id = claims
        .sub
        .parse::<i64>()
        .map_err(|_| "Malformed subject in access token".to_string())?;

    let user = storage
        .get_user_by_id(user_id)
        .await
        .map_err(|_| "Could not load account".to_string())?
        .ok_or_else(|| "Account no longer exists".to_string())?;

    if user.status != UserStatus::Active {
        return Err("Account is disabled".to_string());
    }

    if let Ok(user_json) = serde_json::to_string(&user) {
        cache
            .insert_raw(cache_key, user_json, AppConfig::get().cache.default_ttl)
            .await;
    }

    Ok(user)
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // CORS 预检放行
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    HttpResponse::NoContent().finish().map_into_right_body(),
                ));
            }

            match authenticate(&req).await {
                Ok(user) => {
                    debug!("Authenticated user {} via JWT", user.id);
                    req.extensions_mut().insert(user);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!("Rejected {} with: {}", req.path(), err);
                    let response = unauthorized(&format!("Authentication failed: {err}"));
                    Ok(req.into_response(response.map_into_right_body()))
                }
            }
        })
    }
}

impl RequireJWT {
    /// 读取当前登录用户，仅在挂了本中间件的路由里可用
    pub fn extract_user_claims(req: &actix_web::HttpRequest) -> Option<User> {
        req.extensions().get::<User>().cloned()
    }

    pub fn extract_user_id(req: &actix_web::HttpRequest) -> Option<i64> {
        req.extensions().get::<User>().map(|user| user.id)
    }

    pub fn extract_user_role(req: &actix_web::HttpRequest) -> Option<UserRole> {
        req.extensions().get::<User>().map(|user| user.role)
    }
}
