/*!
 * 速率限制中间件
 *
 * 按「调用方 + 端点」维护一个固定时间窗口内的计数，超限返回 429。
 * 已登录请求以用户 ID 计数，匿名请求退回客户端 IP。
 *
 * ```rust,ignore
 * web::resource("/login")
 *     .wrap(RateLimit::login())
 *     .route(web::post().to(login_handler))
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::CONTENT_TYPE,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use moka::future::Cache;
use once_cell::sync::Lazy;
use std::rc::Rc;
use std::time::Duration;
use tracing::warn;

use crate::models::{ApiResponse, ErrorCode};

// 窗口计数器，键为 scope:调用方，随 TTL 过期即窗口重置
static WINDOW_COUNTERS: Lazy<Cache<String, u32>> = Lazy::new(|| {
    Cache::builder()
        .time_to_live(Duration::from_secs(WINDOW_SECS))
        .max_capacity(100_000)
        .build()
});

const WINDOW_SECS: u64 = 60;

/// 速率限制策略，scope 区分不同端点的计数空间
#[derive(Clone)]
pub struct RateLimit {
    limit: u32,
    scope: &'static str,
}

impl RateLimit {
    fn scoped(limit: u32, scope: &'static str) -> Self {
        Self { limit, scope }
    }

    /// 登录：每分钟 5 次
    pub fn login() -> Self {
        Self::scoped(5, "login")
    }

    /// 注册：每分钟 3 次
    pub fn register() -> Self {
        Self::scoped(3, "register")
    }

    /// 刷新令牌：每分钟 10 次
    pub fn refresh_token() -> Self {
        Self::scoped(10, "refresh")
    }

    /// 加入码查询：每分钟 10 次，抑制枚举
    pub fn join_code() -> Self {
        Self::scoped(10, "join_code")
    }
}

fn parses_as_ip(candidate: &str) -> bool {
    candidate.parse::<std::net::IpAddr>().is_ok()
}

/// 计数键里的调用方标识
///
/// 已认证请求直接用用户 ID。匿名请求依次尝试连接对端地址、
/// X-Forwarded-For 首项、X-Real-IP，均要求能解析成合法 IP；
/// 反向代理需自行保证转发头可信。
fn caller_identity(req: &ServiceRequest) -> String {
    use crate::models::users::entities::User;

    if let Some(user) = req.extensions().get::<User>() {
        return format!("user:{}", user.id);
    }

    let peer = req
        .connection_info()
        .realip_remote_addr()
        .map(|s| s.to_string());

    if let Some(ref ip) = peer
        && parses_as_ip(ip)
    {
        return format!("ip:{ip}");
    }

    let forwarded = req
        .headers()
        .get("X-Forwarded-For")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|ip| parses_as_ip(ip));
    if let Some(ip) = forwarded {
        return format!("ip:{ip}");
    }

    let real_ip = req
        .headers()
        .get("X-Real-IP")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|ip| parses_as_ip(ip));
    if let Some(ip) = real_ip {
        return format!("ip:{ip}");
    }

    format!("ip:{}", peer.unwrap_or_else(|| "unknown".to_string()))
}

fn too_many_requests() -> HttpResponse {
    HttpResponse::build(StatusCode::TOO_MANY_REQUESTS)
        .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
        .insert_header(("Retry-After", WINDOW_SECS.to_string()))
        .json(ApiResponse::<()>::error_empty(
            ErrorCode::RateLimitExceeded,
            "Too many requests, please try again later",
        ))
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            policy: self.clone(),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    policy: RateLimit,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
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
        let policy = self.policy.clone();

        Box::pin(async move {
            let counter_key = format!("{}:{}", policy.scope, caller_identity(&req));

            let seen = WINDOW_COUNTERS.get(&counter_key).await.unwrap_or(0);
            if seen >= policy.limit {
                warn!(
                    "速率限制触发: {} 已达 {}/{}",
                    counter_key, seen, policy.limit
                );
                return Ok(req.into_response(too_many_requests().map_into_right_body()));
            }

            WINDOW_COUNTERS.insert(counter_key, seen + 1).await;

            let res = srv.call(req).await?.map_into_left_body();
            Ok(res)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_limits() {
        assert_eq!(RateLimit::login().limit, 5);
        assert_eq!(RateLimit::login().scope, "login");
        assert_eq!(RateLimit::register().limit, 3);
        assert_eq!(RateLimit::refresh_token().limit, 10);
        assert_eq!(RateLimit::join_code().limit, 10);
        assert_eq!(RateLimit::join_code().scope, "join_code");
    }

    #[test]
    fn test_ip_validation() {
        assert!(parses_as_ip("10.0.0.1"));
        assert!(parses_as_ip("::1"));
        assert!(!parses_as_ip("not-an-ip"));
        assert!(!parses_as_ip(""));
    }
}
