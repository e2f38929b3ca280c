use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 班级成员关系，普通的关联记录，成员均为学生
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class-member.ts")]
pub struct ClassMember {
    pub id: i64,
    pub class_id: i64,
    pub user_id: i64,
    pub joined_at: chrono::DateTime<chrono::Utc>,
}

// 成员花名册条目，成员关系加上用户概要
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class-member.ts")]
pub struct ClassMemberDetail {
    pub id: i64,
    pub class_id: i64,
    pub user_id: i64,
    pub username: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub joined_at: chrono::DateTime<chrono::Utc>,
}
