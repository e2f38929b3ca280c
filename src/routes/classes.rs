//! 班级路由，查询、创建、加入码预览与管理操作

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::classes::requests::{ClassQueryParams, CreateClassRequest, UpdateClassRequest};
use crate::models::users::entities::UserRole;
use crate::services::ClassService;
use crate::utils::SafeClassIdI64;

static CLASS_SERVICE: Lazy<ClassService> = Lazy::new(ClassService::new_lazy);

pub async fn list_classes(
    req: HttpRequest,
    query: web::Query<ClassQueryParams>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.list_classes(&req, query.into_inner()).await
}

pub async fn create_class(
    req: HttpRequest,
    class_data: web::Json<CreateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .create_class(&req, class_data.into_inner())
        .await
}

pub async fn get_class_by_code(
    req: HttpRequest,
    code: web::Path<String>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .get_class_by_code(&req, code.into_inner())
        .await
}

pub async fn get_class(req: HttpRequest, class_id: SafeClassIdI64) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.get_class(&req, class_id.0).await
}

pub async fn update_class(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    update_data: web::Json<UpdateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .update_class(&req, class_id.0, update_data.into_inner())
        .await
}

pub async fn delete_class(req: HttpRequest, class_id: SafeClassIdI64) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.delete_class(&req, class_id.0).await
}

pub fn configure_classes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes")
            .wrap(middlewares::RequireJWT)
            .service(
                // 列表按角色过滤，建班限教师和管理员
                web::resource("").route(web::get().to(list_classes)).route(
                    web::post()
                        .to(create_class)
                        .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                ),
            )
            .service(
                // 学生凭加入码预览班级，限速防止穷举
                web::resource("/code/{code}")
                    .wrap(middlewares::RateLimit::join_code())
                    .route(
                        web::get()
                            .to(get_class_by_code)
                            .wrap(middlewares::RequireRole::new_any(UserRole::student_roles())),
                    ),
            )
            .service(
                // 详情对成员开放，更新删除的归属校验在服务层做
                web::resource("/{class_id}")
                    .route(
                        web::get()
                            .to(get_class)
                            .wrap(middlewares::RequireClassAccess::member()),
                    )
                    .route(
                        web::put()
                            .to(update_class)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_class)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
