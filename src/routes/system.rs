use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, middleware, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::services::SystemService;

static SYSTEM_SERVICE: Lazy<SystemService> = Lazy::new(SystemService::new_lazy);

pub async fn health(request: HttpRequest) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.health(&request).await
}

pub async fn status(request: HttpRequest) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.status(&request).await
}

pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/system")
            .wrap(middleware::Compress::default())
            // 健康检查不要求登录，供负载均衡探活使用
            .route("/health", web::get().to(health))
            .service(
                // wrap 后注册的先执行，JWT 校验在角色校验之前
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
                    .wrap(middlewares::RequireJWT)
                    .route("/status", web::get().to(status)),
            ),
    );
}
