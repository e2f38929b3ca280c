use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use super::SystemService;
use crate::models::{
    ApiResponse,
    system::{
        entities::AppStartTime,
        responses::{HealthResponse, SystemStatusResponse},
    },
};

/// 健康检查，不要求登录
pub async fn health(_service: &SystemService, _req: &HttpRequest) -> ActixResult<HttpResponse> {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Service is healthy")))
}

/// 系统运行状态
pub async fn status(service: &SystemService, req: &HttpRequest) -> ActixResult<HttpResponse> {
    let config = service.get_config();

    // 启动时间随 app_data 注入，取不到时以当前时间兜底
    let started_at = req
        .app_data::<web::Data<AppStartTime>>()
        .map(|t| t.start_datetime)
        .unwrap_or_else(chrono::Utc::now);
    let uptime_seconds = (chrono::Utc::now() - started_at).num_seconds();

    let response = SystemStatusResponse {
        name: config.app.system_name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: config.app.environment.clone(),
        uptime_seconds,
        started_at,
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "System status retrieved successfully",
    )))
}
