use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{ClassService, ensure_class_owner, load_class};
use crate::{
    middlewares::RequireJWT,
    models::{ApiResponse, ErrorCode, classes::requests::UpdateClassRequest},
};

/// 改班级资料，仅管理员或该班教师可操作
pub async fn update_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    update_data: UpdateClassRequest,
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
        "Only the owning teacher or an admin can update this class",
    ) {
        return Ok(resp);
    }

    match storage.update_class(class_id, update_data).await {
        Ok(Some(class)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            class,
            "Class updated",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassNotFound,
            "Class not found",
        ))),
        Err(e) => {
            let msg = format!("Could not update class: {e}");
            error!("{}", msg);
            // class_name 撞唯一索引时给出冲突码
            if msg.contains("UNIQUE constraint failed") || msg.contains("duplicate key") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::ClassAlreadyExists,
                    "Class name already taken",
                )))
            } else {
                Ok(HttpResponse::InternalServerError()
                    .json(ApiResponse::error_empty(ErrorCode::ClassUpdateFailed, msg)))
            }
        }
    }
}
