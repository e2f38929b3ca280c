use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{ClassService, ensure_class_owner, load_class};
use crate::{
    middlewares::RequireJWT,
    models::{ApiResponse, ErrorCode},
};

/// 删班级，成员、考勤与事件记录跟随级联删除
pub async fn delete_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
) -> ActixResult<HttpResponse> {
    let Some(uid) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized: no authenticated user",
        )));
    };

    let storage = service.get_storage(request);
    let class = match load_class(&storage, class_id).await {
        Ok(class) => class,
        Err(resp) => return Ok(resp),
    };
    if let Err(resp) = ensure_class_owner(
        RequireJWT::extract_user_role(request),
        uid,
        &class,
        "Only the owning teacher or an admin can delete this class",
    ) {
        return Ok(resp);
    }

    match storage.delete_class(class_id).await {
        Ok(true) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Class deleted")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassNotFound,
            "Class not found",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ClassDeleteFailed,
                format!("Could not delete class: {e}"),
            )),
        ),
    }
}
