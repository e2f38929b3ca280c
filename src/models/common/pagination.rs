use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 分页查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationQuery {
    #[serde(default = "default_page", deserialize_with = "de_flexible_i64")]
    pub page: i64,
    #[serde(default = "default_size", deserialize_with = "de_flexible_i64")]
    pub size: i64,
}

// 分页响应信息
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginationInfo {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

// 分页列表响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/pagination.ts")]
pub struct PaginatedResponse<T: TS> {
    pub items: Vec<T>,
    pub pagination: PaginationInfo,
}

/// 查询串里的数字以字符串形式到达，这里同时接受整数和数字字符串
fn de_flexible_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(i64),
        Text(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(value) => Ok(value),
        NumberOrString::Text(text) => text
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("无法解析分页参数: '{text}'"))),
    }
}

fn default_page() -> i64 {
    1
}

fn default_size() -> i64 {
    10
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            size: default_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_query_from_string_values() {
        let query: PaginationQuery =
            serde_json::from_str(r#"{"page": "3", "size": "20"}"#).unwrap();
        assert_eq!(query.page, 3);
        assert_eq!(query.size, 20);
    }

    #[test]
    fn test_pagination_query_from_integer_values() {
        let query: PaginationQuery = serde_json::from_str(r#"{"page": 2, "size": 50}"#).unwrap();
        assert_eq!(query.page, 2);
        assert_eq!(query.size, 50);
    }

    #[test]
    fn test_pagination_query_defaults() {
        let query: PaginationQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.size, 10);
    }

    #[test]
    fn test_pagination_query_rejects_garbage() {
        let result: Result<PaginationQuery, _> =
            serde_json::from_str(r#"{"page": "abc", "size": 10}"#);
        assert!(result.is_err());
    }
}
