/*!
 * 班级访问控制中间件
 *
 * 此中间件必须在 RequireJWT 中间件之后使用，按访问级别校验用户对路径中
 * `class_id` 对应班级的权限：
 *
 * - `Member`：班主任教师、班级成员或管理员可访问
 * - `Teach`：仅班主任教师或管理员可访问
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::{web, App};
 * use crate::middlewares::{RequireJWT, RequireClassAccess};
 *
 * App::new()
 *     .service(
 *         web::scope("/api/v1/classes/{class_id}")
 *             .wrap(RequireJWT)  // 先验证JWT
 *             .service(
 *                 web::resource("/events")
 *                     .route(web::get().to(list_events).wrap(RequireClassAccess::member()))
 *                     .route(web::post().to(create_event).wrap(RequireClassAccess::teach()))
 *             )
 *     )
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};

use crate::{
    models::{
        ErrorCode,
        class_members::entities::ClassMember,
        classes::entities::Class,
        users::entities::{User, UserRole},
    },
    storage::Storage,
};

use super::create_error_response;

/// 班级访问级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassAccessLevel {
    /// 班级成员（学生）、班主任教师或管理员
    Member,
    /// 班主任教师或管理员
    Teach,
}

#[derive(Clone)]
pub struct RequireClassAccess {
    level: ClassAccessLevel,
}

impl RequireClassAccess {
    pub fn new(level: ClassAccessLevel) -> Self {
        Self { level }
    }

    /// 班级成员可访问
    pub fn member() -> Self {
        Self::new(ClassAccessLevel::Member)
    }

    /// 仅班主任教师可访问
    pub fn teach() -> Self {
        Self::new(ClassAccessLevel::Teach)
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireClassAccess
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireClassAccessMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireClassAccessMiddleware {
            service: Rc::new(service),
            level: self.level,
        }))
    }
}

pub struct RequireClassAccessMiddleware<S> {
    service: Rc<S>,
    level: ClassAccessLevel,
}

impl<S, B> Service<ServiceRequest> for RequireClassAccessMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let level = self.level;

        Box::pin(async move {
            // 1. 校验用户信息
            let current_user = req.extensions().get::<User>().cloned();
            let user = match current_user {
                Some(user) => user,
                None => {
                    return Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            "Unauthorized: no authenticated user",
                        )
                        .map_into_right_body(),
                    ));
                }
            };

            // 2. 校验 class_id
            let class_id = match req
                .match_info()
                .get("class_id")
                .and_then(|s| s.parse::<i64>().ok())
            {
                Some(cid) => cid,
                None => {
                    return Ok(req.into_response(
                        create_error_response(
                            StatusCode::BAD_REQUEST,
                            ErrorCode::BadRequest,
                            "class_id missing from request path",
                        )
                        .map_into_right_body(),
                    ));
                }
            };

            // 3. 班级必须存在
            let class = match get_class_by_id(&req, class_id).await {
                Some(class) => class,
                None => {
                    return Ok(req.into_response(
                        create_error_response(
                            StatusCode::NOT_FOUND,
                            ErrorCode::ClassNotFound,
                            "Class not found",
                        )
                        .map_into_right_body(),
                    ));
                }
            };

            // 4. 管理员和班主任教师直接放行
            if user.role == UserRole::Admin || class.teacher_id == user.id {
                req.extensions_mut().insert(class);
                return Ok(srv.call(req).await?.map_into_left_body());
            }

            // 5. Teach 级别到这里已经没有放行余地
            if level == ClassAccessLevel::Teach {
                return Ok(req.into_response(
                    create_error_response(
                        StatusCode::FORBIDDEN,
                        ErrorCode::ClassPermissionDenied,
                        "Only the class teacher can perform this action",
                    )
                    .map_into_right_body(),
                ));
            }

            // 6. Member 级别查询成员关系
            match get_class_member(&req, user.id, class_id).await {
                Some(member) => {
                    tracing::debug!(
                        "User {} is a member of class {}",
                        member.user_id,
                        member.class_id
                    );
                    req.extensions_mut().insert(class);
                    req.extensions_mut().insert(member);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                None => Ok(req.into_response(
                    create_error_response(
                        StatusCode::FORBIDDEN,
                        ErrorCode::ClassPermissionDenied,
                        "You are not a member of this class",
                    )
                    .map_into_right_body(),
                )),
            }
        })
    }
}

// 中间件校验通过后会把班级和成员关系塞进 extensions，处理函数从这里取
impl RequireClassAccess {
    /// 取出中间件预查好的班级，路由未套本中间件时返回 None
    pub fn extract_class(req: &actix_web::HttpRequest) -> Option<Class> {
        req.extensions().get::<Class>().cloned()
    }

    /// 取出当前用户的成员关系，管理员和班主任走的是放行分支，返回 None
    pub fn extract_membership(req: &actix_web::HttpRequest) -> Option<ClassMember> {
        req.extensions().get::<ClassMember>().cloned()
    }
}

async fn get_class_by_id(req: &ServiceRequest, class_id: i64) -> Option<Class> {
    let storage = req
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone();

    match storage.get_class_by_id(class_id).await {
        Ok(Some(class)) => Some(class),
        Ok(None) => None,
        Err(_) => None,
    }
}

async fn get_class_member(
    req: &ServiceRequest,
    user_id: i64,
    class_id: i64,
) -> Option<ClassMember> {
    let storage = req
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone();

    match storage
        .get_class_member_by_user_id_and_class_id(user_id, class_id)
        .await
    {
        Ok(Some(member)) => Some(member),
        Ok(None) => None,
        Err(_) => None,
    }
}
