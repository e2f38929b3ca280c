use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::events::requests::{CreateEventRequest, EventListParams, UpdateEventRequest};
use crate::services::EventService;
use crate::utils::{SafeClassIdI64, SafeEventIdI64};

static EVENT_SERVICE: Lazy<EventService> = Lazy::new(EventService::new_lazy);

pub async fn create_event(
    req: HttpRequest,
    path: SafeClassIdI64,
    event_data: web::Json<CreateEventRequest>,
) -> ActixResult<HttpResponse> {
    EVENT_SERVICE
        .create_event(&req, path.0, event_data.into_inner())
        .await
}

pub async fn list_events(
    req: HttpRequest,
    path: SafeClassIdI64,
    query: web::Query<EventListParams>,
) -> ActixResult<HttpResponse> {
    EVENT_SERVICE
        .list_events(&req, path.0, query.into_inner())
        .await
}

pub async fn get_event(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    event_id: SafeEventIdI64,
) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.get_event(&req, class_id.0, event_id.0).await
}

pub async fn update_event(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    event_id: SafeEventIdI64,
    update_data: web::Json<UpdateEventRequest>,
) -> ActixResult<HttpResponse> {
    EVENT_SERVICE
        .update_event(&req, class_id.0, event_id.0, update_data.into_inner())
        .await
}

pub async fn delete_event(
    req: HttpRequest,
    class_id: SafeClassIdI64,
    event_id: SafeEventIdI64,
) -> ActixResult<HttpResponse> {
    EVENT_SERVICE
        .delete_event(&req, class_id.0, event_id.0)
        .await
}

pub fn configure_events_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes/{class_id}/events")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(
                        web::post()
                            .to(create_event)
                            // 班主任教师或管理员创建事件
                            .wrap(middlewares::RequireClassAccess::teach()),
                    )
                    .route(
                        web::get()
                            .to(list_events)
                            // 班级日程对全体成员可见
                            .wrap(middlewares::RequireClassAccess::member()),
                    ),
            )
            .service(
                web::resource("/{event_id}")
                    .route(
                        web::get()
                            .to(get_event)
                            .wrap(middlewares::RequireClassAccess::member()),
                    )
                    .route(
                        web::put()
                            .to(update_event)
                            .wrap(middlewares::RequireClassAccess::teach()),
                    )
                    .route(
                        web::delete()
                            .to(delete_event)
                            .wrap(middlewares::RequireClassAccess::teach()),
                    ),
            ),
    );
}
