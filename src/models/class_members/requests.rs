use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

// 加入班级请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class-member.ts")]
pub struct JoinClassRequest {
    pub join_code: String,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class-member.ts")]
pub struct ClassMemberListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

// 成员列表查询参数（用于存储层）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class-member.ts")]
pub struct ClassMemberQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}

impl From<ClassMemberListParams> for ClassMemberQuery {
    fn from(params: ClassMemberListParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            search: params.search,
        }
    }
}
