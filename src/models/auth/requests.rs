use serde::Deserialize;
use ts_rs::TS;

// 用户登录请求，username 字段同时接受用户名和邮箱
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    // 勾选后刷新令牌改用长有效期
    #[serde(default)]
    pub remember_me: bool,
}

// 用户注册请求，注册的账号固定为学生角色
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub display_name: Option<String>,
}

// 更新个人资料请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct UpdateProfileRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
}
