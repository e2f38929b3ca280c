use actix_web::{HttpRequest, HttpResponse, error};

use crate::models::{ApiResponse, ErrorCode};

/// JSON 请求体解析错误处理器
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        error::JsonPayloadError::ContentType => "请求头 Content-Type 必须为 application/json".to_string(),
        error::JsonPayloadError::Deserialize(e) => format!("请求体格式错误: {e}"),
        other => format!("请求体解析失败: {other}"),
    };
    let response = HttpResponse::BadRequest()
        .json(ApiResponse::<()>::error_empty(ErrorCode::BadRequest, message));
    error::InternalError::from_response(err, response).into()
}

/// 查询参数解析错误处理器
pub fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        error::QueryPayloadError::Deserialize(e) => format!("查询参数格式错误: {e}"),
        other => format!("查询参数解析失败: {other}"),
    };
    let response = HttpResponse::BadRequest()
        .json(ApiResponse::<()>::error_empty(ErrorCode::BadRequest, message));
    error::InternalError::from_response(err, response).into()
}
