use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::ClassMemberService;
use crate::{
    middlewares::RequireJWT,
    models::{ApiResponse, ErrorCode, class_members::requests::JoinClassRequest},
};

pub async fn join_class(
    service: &ClassMemberService,
    request: &HttpRequest,
    class_id: i64,
    join_data: JoinClassRequest,
) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: no authenticated user",
            )));
        }
    };

    let storage = service.get_storage(request);
    let join_code = join_data.join_code.trim();

    // 通过加入码定位班级，码属于其他班级时同样按无效处理，
    // 不区分"班级不存在"和"码不对"
    let class = match storage.get_class_by_code(join_code).await {
        Ok(Some(class)) if class.id == class_id => class,
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassJoinCodeInvalid,
                "Class not found or join code is invalid",
            )));
        }
        Err(e) => {
            error!("Error getting class by join code: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ClassJoinFailed,
                    "Failed to get class by join code",
                )),
            );
        }
    };

    // 检查是否已经是成员
    match storage
        .get_class_member_by_user_id_and_class_id(user_id, class.id)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error(
                ErrorCode::ClassAlreadyJoined,
                class.without_join_code(),
                "Already a member of this class",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Error getting class membership: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ClassJoinFailed,
                    "Failed to get class membership",
                )),
            );
        }
    }

    match storage.join_class(user_id, class.id).await {
        Ok(member) => {
            info!("User {} joined class {}", user_id, class.id);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(member, "Joined the class successfully")))
        }
        Err(e) => {
            error!("Join class failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ClassJoinFailed,
                    "Could not join the class",
                )),
            )
        }
    }
}
