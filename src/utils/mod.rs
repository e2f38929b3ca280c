//! 横切工具，提取器、JWT、口令哈希等

pub mod extractor;
pub mod jwt;
pub mod parameter_error_handler;
pub mod password;
pub mod random_code;
pub mod sql;
pub mod validate;

pub use extractor::{
    SafeClassIdI64, SafeEventIdI64, SafeIDI64, SafeNotificationIdI64, SafeReminderIdI64,
};
pub use parameter_error_handler::{json_error_handler, query_error_handler};
pub use sql::escape_like_pattern;
