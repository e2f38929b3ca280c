//! SeaORM 表实体
//!
//! 与 models 里的业务模型分开维护，Storage 层读写这些实体，
//! 出库后经各实体的 into_* 方法换成业务模型再往上递。

pub mod prelude;

pub mod attendance;
pub mod class_members;
pub mod classes;
pub mod events;
pub mod notifications;
pub mod reminders;
pub mod users;

/// 数据库里的 Unix 秒转 UTC 时间，越界时间戳按纪元零点处理
pub(crate) fn ts_to_utc(ts: i64) -> chrono::DateTime<chrono::Utc> {
    chrono::DateTime::from_timestamp(ts, 0).unwrap_or_default()
}
