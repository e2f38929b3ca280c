use serde::Serialize;
use ts_rs::TS;

use super::entities::ClassMemberDetail;
use crate::models::PaginationInfo;

/// 班级成员花名册响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class-member.ts")]
pub struct ClassMemberListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<ClassMemberDetail>,
}
