//! 业务错误码定义
//!
//! 错误码按 HTTP 状态码分段：40000 参数错误、40100 未认证、
//! 40300 禁止访问、40400 资源不存在、40900 冲突、42900 频率限制、
//! 50000 服务器内部错误。

/// 业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 400 参数错误
    BadRequest = 40000,
    UserNameInvalid = 40001,
    UserEmailInvalid = 40002,
    UserPasswordInvalid = 40003,
    AttendanceDateInvalid = 40004,
    EventTimeInvalid = 40005,
    NotAClassMember = 40006,
    CanNotDeleteCurrentUser = 40007,

    // 401 未认证
    Unauthorized = 40100,
    AuthFailed = 40101,

    // 403 禁止访问
    Forbidden = 40300,
    ClassPermissionDenied = 40301,

    // 404 资源不存在
    NotFound = 40400,
    UserNotFound = 40401,
    ClassNotFound = 40402,
    ClassMemberNotFound = 40403,
    AttendanceNotFound = 40404,
    EventNotFound = 40405,
    ReminderNotFound = 40406,
    NotificationNotFound = 40407,
    ClassJoinCodeInvalid = 40408,

    // 409 冲突
    UserAlreadyExists = 40901,
    UserNameAlreadyExists = 40902,
    UserEmailAlreadyExists = 40903,
    ClassAlreadyExists = 40904,
    ClassAlreadyJoined = 40905,

    // 429 频率限制
    RateLimitExceeded = 42900,

    // 500 服务器错误
    InternalServerError = 50000,
    RegisterFailed = 50001,
    UserCreationFailed = 50002,
    UserUpdateFailed = 50003,
    UserDeleteFailed = 50004,
    ClassCreationFailed = 50005,
    ClassUpdateFailed = 50006,
    ClassDeleteFailed = 50007,
    ClassJoinFailed = 50008,
    AttendanceRecordFailed = 50009,
    EventCreationFailed = 50010,
    EventUpdateFailed = 50011,
    EventDeleteFailed = 50012,
    ReminderCreationFailed = 50013,
    ReminderUpdateFailed = 50014,
    ReminderDeleteFailed = 50015,
    NotificationUpdateFailed = 50016,
    NotificationDeleteFailed = 50017,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::BadRequest as i32, 40000);
        assert_eq!(ErrorCode::Unauthorized as i32, 40100);
        assert_eq!(ErrorCode::ClassJoinCodeInvalid as i32, 40408);
        assert_eq!(ErrorCode::ClassAlreadyJoined as i32, 40905);
        assert_eq!(ErrorCode::RateLimitExceeded as i32, 42900);
        assert_eq!(ErrorCode::InternalServerError as i32, 50000);
    }
}
