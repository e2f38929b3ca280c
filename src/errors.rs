//! 存储与缓存层的内部错误类型
//!
//! 变体由宏展开生成，每个变体带稳定的错误代码和类型名，
//! 服务层拿到后统一换成响应信封里的业务错误码。

use std::fmt;

/// 展开出 enum、code()/error_type()/message() 和 snake_case 构造函数
macro_rules! define_classtrack_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum ClassTrackError {
            $($variant(String),)*
        }

        impl ClassTrackError {
            fn meta(&self) -> (&'static str, &'static str) {
                match self {
                    $(ClassTrackError::$variant(_) => ($code, $type_name),)*
                }
            }

            pub fn code(&self) -> &'static str {
                self.meta().0
            }

            pub fn error_type(&self) -> &'static str {
                self.meta().1
            }

            pub fn message(&self) -> &str {
                match self {
                    $(ClassTrackError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl ClassTrackError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ClassTrackError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_classtrack_errors! {
    CacheConnection("E001", "Cache connection failed"),
    DatabaseConfig("E002", "Database configuration invalid"),
    DatabaseConnection("E003", "Database connection failed"),
    DatabaseOperation("E004", "Database operation failed"),
    Validation("E005", "Validation failed"),
    Serialization("E006", "Serialization failed"),
}

impl fmt::Display for ClassTrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_type(), self.message())
    }
}

impl std::error::Error for ClassTrackError {}

impl From<sea_orm::DbErr> for ClassTrackError {
    fn from(err: sea_orm::DbErr) -> Self {
        ClassTrackError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ClassTrackError {
    fn from(err: serde_json::Error) -> Self {
        ClassTrackError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClassTrackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ClassTrackError::cache_connection("test").code(), "E001");
        assert_eq!(ClassTrackError::database_config("test").code(), "E002");
        assert_eq!(ClassTrackError::database_operation("test").code(), "E004");
        assert_eq!(ClassTrackError::validation("test").code(), "E005");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            ClassTrackError::cache_connection("test").error_type(),
            "Cache connection failed"
        );
        assert_eq!(
            ClassTrackError::validation("test").error_type(),
            "Validation failed"
        );
    }

    #[test]
    fn test_error_message() {
        let err = ClassTrackError::validation("date out of range");
        assert_eq!(err.message(), "date out of range");
    }

    #[test]
    fn test_display_includes_type_and_message() {
        let err = ClassTrackError::validation("date out of range");
        let formatted = err.to_string();
        assert!(formatted.contains("Validation failed"));
        assert!(formatted.contains("date out of range"));
    }
}
