/*!
 * 角色访问控制中间件
 *
 * 放在 RequireJWT 之后，当前用户角色命中允许列表才放行。
 * 角色组合用 `UserRole::admin_roles()` 等预置分组传入：
 *
 * ```rust,ignore
 * web::scope("")
 *     .wrap(RequireRole::new_any(UserRole::teacher_roles()))
 *     .route("", web::post().to(create_class))
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
use std::rc::Rc;
use tracing::info;

use crate::models::{
    ErrorCode,
    users::entities::{User, UserRole},
};

use super::create_error_response;

#[derive(Clone)]
pub struct RequireRole {
    allowed: Vec<UserRole>,
}

impl RequireRole {
    /// 允许列表中任一角色即可通过
    pub fn new_any(roles: &[&UserRole]) -> Self {
        Self {
            allowed: roles.iter().map(|r| **r).collect(),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service: Rc::new(service),
            allowed: self.allowed.clone(),
        }))
    }
}

pub struct RequireRoleMiddleware<S> {
    service: Rc<S>,
    allowed: Vec<UserRole>,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
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
        let allowed = self.allowed.clone();

        Box::pin(async move {
            let current = req
                .extensions()
                .get::<User>()
                .map(|user| (user.id, user.role));

            let Some((user_id, role)) = current else {
                info!("Role check without authenticated user, is RequireJWT applied first?");
                return Ok(req.into_response(
                    create_error_response(
                        StatusCode::UNAUTHORIZED,
                        ErrorCode::Unauthorized,
                        "Login required",
                    )
                    .map_into_right_body(),
                ));
            };

            if !allowed.contains(&role) {
                info!(
                    "User {} with role {:?} blocked, allowed roles: {:?}",
                    user_id, role, allowed
                );
                return Ok(req.into_response(
                    create_error_response(
                        StatusCode::FORBIDDEN,
                        ErrorCode::Unauthorized,
                        "Your role does not allow this operation",
                    )
                    .map_into_right_body(),
                ));
            }

            let res = srv.call(req).await?.map_into_left_body();
            Ok(res)
        })
    }
}
