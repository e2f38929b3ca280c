//! 班级接口的请求模型

use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

/// 班级列表查询参数，来自 HTTP 请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassQueryParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub teacher_id: Option<i64>,
}

/// 存储层使用的班级列表查询
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct ClassListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub teacher_id: Option<i64>,
    pub search: Option<String>,
}

impl From<ClassQueryParams> for ClassListQuery {
    fn from(params: ClassQueryParams) -> Self {
        Self {
            page: Some(params.pagination.page),
            size: Some(params.pagination.size),
            teacher_id: params.teacher_id,
            search: params.search,
        }
    }
}

/// 创建班级请求
///
/// teacher_id 的取值规则：教师可以不填，默认为自己，填了必须等于自己的 ID；
/// 管理员必填，且指向的用户必须是教师角色。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct CreateClassRequest {
    pub teacher_id: Option<i64>,
    pub class_name: String,
    pub description: Option<String>,
}

/// 更新班级请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct UpdateClassRequest {
    pub class_name: Option<String>,
    pub description: Option<String>,
    /// 为 true 时重新生成加入码
    #[serde(default)]
    pub regenerate_join_code: bool,
}
