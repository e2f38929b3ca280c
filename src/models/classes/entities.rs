use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class.ts")]
pub struct Class {
    // 班级ID
    pub id: i64,
    // 班级名称
    pub class_name: String,
    // 班级描述
    pub description: Option<String>,
    // 教师ID
    pub teacher_id: i64,
    // 加入码，仅对班主任教师和管理员可见
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_code: Option<String>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Class {
    /// 去掉加入码后的视图，用于学生和非班主任的响应
    pub fn without_join_code(mut self) -> Self {
        self.join_code = None;
        self
    }
}
