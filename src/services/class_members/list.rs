use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassMemberService;
use crate::models::{ApiResponse, ErrorCode, class_members::requests::ClassMemberListParams};

pub async fn list_class_members(
    service: &ClassMemberService,
    request: &HttpRequest,
    class_id: i64,
    query: ClassMemberListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .list_class_members_with_pagination(class_id, query.into())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Class member list retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to retrieve class member list: {e}"),
            )),
        ),
    }
}
