use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::class_members::requests::{ClassMemberListParams, JoinClassRequest};
use crate::models::users::entities::UserRole;
use crate::services::ClassMemberService;
use crate::utils::SafeClassIdI64;

use crate::define_safe_i64_extractor;

// 成员路径带成员的 user_id，负数一律挡掉
define_safe_i64_extractor!(SafeMemberUserID, "user_id");

static CLASS_MEMBER_SERVICE: Lazy<ClassMemberService> = Lazy::new(ClassMemberService::new_lazy);

pub async fn join_class(
    req: HttpRequest,
    path: SafeClassIdI64,
    join_data: web::Json<JoinClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_MEMBER_SERVICE
        .join_class(&req, path.0, join_data.into_inner())
        .await
}

pub async fn list_class_members(
    req: HttpRequest,
    path: SafeClassIdI64,
    query: web::Query<ClassMemberListParams>,
) -> ActixResult<HttpResponse> {
    CLASS_MEMBER_SERVICE
        .list_class_members(&req, path.0, query.into_inner())
        .await
}

pub async fn get_class_member(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    user_id: SafeMemberUserID,
) -> ActixResult<HttpResponse> {
    CLASS_MEMBER_SERVICE
        .get_class_member(&req, class_id.0, user_id.0)
        .await
}

pub async fn remove_class_member(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    user_id: SafeMemberUserID,
) -> ActixResult<HttpResponse> {
    CLASS_MEMBER_SERVICE
        .remove_class_member(&req, class_id.0, user_id.0)
        .await
}

pub fn configure_class_members_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes/{class_id}/members")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::post()
                            .to(join_class)
                            // 学生凭加入码加入班级，入班前还不是成员，不做班级访问校验
                            .wrap(middlewares::RequireRole::new_any(UserRole::student_roles())),
                    )
                    .route(
                        web::get()
                            .to(list_class_members)
                            // 花名册对班级成员、班主任教师和管理员可见
                            .wrap(middlewares::RequireClassAccess::member()),
                    ),
            )
            .service(
                web::resource("/{user_id}")
                    .route(
                        web::get()
                            .to(get_class_member)
                            .wrap(middlewares::RequireClassAccess::member()),
                    )
                    .route(
                        web::delete()
                            .to(remove_class_member)
                            // 成员自己退出班级，或班主任教师/管理员移除成员
                            .wrap(middlewares::RequireClassAccess::member()),
                    ),
            ),
    );
}
