use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassMemberService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_class_member(
    service: &ClassMemberService,
    request: &HttpRequest,
    class_id: i64,
    user_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_class_member_detail(class_id, user_id).await {
        Ok(Some(member)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            member,
            "Class member retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassMemberNotFound,
            "Class member not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve class member: {e}"),
            )),
        ),
    }
}
