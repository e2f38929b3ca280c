use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 个人提醒事项
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/reminder.ts")]
pub struct Reminder {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub notes: Option<String>,
    pub due_at: chrono::DateTime<chrono::Utc>,
    pub completed: bool,
    // 由定时任务置位，表示到期通知已生成
    pub notified: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 提醒列表过滤条件
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/reminder.ts")]
pub enum ReminderFilter {
    Pending,   // 未完成
    Completed, // 已完成
    All,       // 全部
}

impl<'de> Deserialize<'de> for ReminderFilter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "pending" => Ok(ReminderFilter::Pending),
            "completed" => Ok(ReminderFilter::Completed),
            "all" => Ok(ReminderFilter::All),
            _ => Err(serde::de::Error::custom(format!(
                "无效的提醒过滤条件: '{s}'. 支持的条件: pending, completed, all"
            ))),
        }
    }
}

impl Default for ReminderFilter {
    fn default() -> Self {
        ReminderFilter::Pending
    }
}

impl std::fmt::Display for ReminderFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReminderFilter::Pending => write!(f, "pending"),
            ReminderFilter::Completed => write!(f, "completed"),
            ReminderFilter::All => write!(f, "all"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reminder_filter_deserialize() {
        let filter: ReminderFilter = serde_json::from_str(r#""completed""#).unwrap();
        assert_eq!(filter, ReminderFilter::Completed);

        let bad: Result<ReminderFilter, _> = serde_json::from_str(r#""done""#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_reminder_filter_default_is_pending() {
        assert_eq!(ReminderFilter::default(), ReminderFilter::Pending);
    }
}
