pub mod attendance;
pub mod auth;
pub mod class_members;
pub mod classes;
pub mod events;
pub mod frontend;
pub mod notifications;
pub mod reminders;
pub mod system;
pub mod users;

pub use attendance::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use class_members::configure_class_members_routes;
pub use classes::configure_classes_routes;
pub use events::configure_events_routes;
pub use frontend::configure_frontend_routes;
pub use notifications::configure_notifications_routes;
pub use reminders::configure_reminders_routes;
pub use system::configure_system_routes;
pub use users::configure_user_routes;
