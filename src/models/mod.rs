//! 数据模型定义
//!
//! 按业务域划分子模块，每个域包含 entities / requests / responses。

pub mod attendance;
pub mod auth;
pub mod class_members;
pub mod classes;
pub mod common;
pub mod events;
pub mod notifications;
pub mod reminders;
pub mod system;
pub mod users;

pub use common::{ApiResponse, ErrorCode, PaginatedResponse, PaginationInfo, PaginationQuery};
pub use system::AppStartTime;
