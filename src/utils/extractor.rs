//! 路径参数安全提取器
//!
//! 路径中的 ID 参数解析失败时直接返回 404，
//! 避免把解析错误透传成 500。

/// 定义一个从路径中按名字提取 i64 参数的提取器
///
/// 生成的类型实现 `FromRequest`，作为独立的处理函数参数使用。
/// 非数字和非正数都按不存在处理，返回 404。
#[macro_export]
macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        pub struct $name(pub i64);

        impl actix_web::FromRequest for $name {
            type Error = actix_web::Error;
            type Future = std::future::Ready<Result<Self, Self::Error>>;

            fn from_request(
                req: &actix_web::HttpRequest,
                _payload: &mut actix_web::dev::Payload,
            ) -> Self::Future {
                match req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok())
                    .filter(|id| *id > 0)
                {
                    Some(id) => std::future::ready(Ok($name(id))),
                    None => {
                        let response = actix_web::HttpResponse::NotFound().json(
                            $crate::models::ApiResponse::<()>::error_empty(
                                $crate::models::ErrorCode::NotFound,
                                format!("路径参数 {} 无效", $param),
                            ),
                        );
                        std::future::ready(Err(actix_web::error::InternalError::from_response(
                            concat!("invalid path parameter: ", $param),
                            response,
                        )
                        .into()))
                    }
                }
            }
        }
    };
}

define_safe_i64_extractor!(SafeIDI64, "id");
define_safe_i64_extractor!(SafeClassIdI64, "class_id");
define_safe_i64_extractor!(SafeEventIdI64, "event_id");
define_safe_i64_extractor!(SafeReminderIdI64, "reminder_id");
define_safe_i64_extractor!(SafeNotificationIdI64, "notification_id");
