//! ClassTrack 班级管理平台的后端服务
//!
//! 面向教师与学生的班级协作后端，覆盖班级与成员管理、考勤登记、
//! 班级事件和个人提醒，基于 Actix Web 与 SeaORM 构建。
//!
//! 模块划分：
//! - `routes` 注册 HTTP 接口，`services` 承载业务规则
//! - `storage` 抽象持久化，`entity` 存放 SeaORM 实体
//! - `middlewares` 提供 JWT、角色与班级访问控制
//! - `runtime` 管理启动停机与到期提醒的定时任务
//! - `cache`、`config`、`errors`、`models`、`utils` 为横切支撑

pub mod cache;
pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
