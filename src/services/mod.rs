//! 业务服务层，每个领域一个子模块

pub mod attendance;
pub mod auth;
pub mod class_members;
pub mod classes;
pub mod events;
pub mod notifications;
pub mod reminders;
pub mod system;
pub mod users;

pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use class_members::ClassMemberService;
pub use classes::ClassService;
pub use events::EventService;
pub use notifications::NotificationService;
pub use reminders::ReminderService;
pub use system::SystemService;
pub use users::UserService;

use actix_web::HttpRequest;
use std::sync::Arc;

use crate::storage::Storage;

/// 取启动时注入 app_data 的存储后端
pub(crate) fn storage_from_request(request: &HttpRequest) -> Arc<dyn Storage> {
    request
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone()
}
