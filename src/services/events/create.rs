use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::{error, info};

use super::EventService;
use crate::{
    middlewares::RequireJWT,
    models::{
        ApiResponse, ErrorCode,
        events::{entities::Event, requests::CreateEventRequest},
        notifications::{entities::Notification, requests::CreateNotificationRequest},
    },
    storage::Storage,
};

pub async fn create_event(
    service: &EventService,
    request: &HttpRequest,
    class_id: i64,
    event_data: CreateEventRequest,
) -> ActixResult<HttpResponse> {
    let uid = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: no authenticated user",
            )));
        }
    };

    // 结束时间不得早于开始时间
    if let Some(ends_at) = event_data.ends_at
        && ends_at < event_data.starts_at
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::EventTimeInvalid,
            "Event end time cannot be earlier than start time",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_event(class_id, uid, event_data).await {
        Ok(event) => {
            info!("Event {} created in class {} by {}", event.id, class_id, uid);

            // 通知全体班级成员，通知失败不影响事件创建
            notify_class_members(&storage, class_id, &event).await;

            Ok(HttpResponse::Created()
                .json(ApiResponse::success(event, "Event created successfully")))
        }
        Err(e) => {
            error!("Error creating event: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::EventCreationFailed,
                    "Failed to create event",
                )),
            )
        }
    }
}

/// 为班级全体成员生成事件通知
async fn notify_class_members(storage: &Arc<dyn Storage>, class_id: i64, event: &Event) {
    let member_ids = match storage.list_class_member_user_ids(class_id).await {
        Ok(ids) => ids,
        Err(e) => {
            error!("Failed to list class members for notification: {}", e);
            return;
        }
    };

    if member_ids.is_empty() {
        return;
    }

    let notifications = member_ids
        .into_iter()
        .map(|member_id| CreateNotificationRequest {
            user_id: member_id,
            notification_type: Notification::TYPE_CLASS_EVENT.to_string(),
            title: format!("New class event: {}", event.title),
            content: event.description.clone(),
            reference_type: Some(Notification::REF_EVENT.to_string()),
            reference_id: Some(event.id),
        })
        .collect::<Vec<_>>();

    match storage.create_notifications_batch(notifications).await {
        Ok(count) => {
            info!("Created {} notifications for event {}", count, event.id);
        }
        Err(e) => {
            error!("Failed to create event notifications: {}", e);
        }
    }
}
