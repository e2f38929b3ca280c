use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 考勤状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub enum AttendanceStatus {
    Present, // 出席
    Absent,  // 缺席
    Late,    // 迟到
    Excused, // 请假
}

impl AttendanceStatus {
    pub const PRESENT: &'static str = "present";
    pub const ABSENT: &'static str = "absent";
    pub const LATE: &'static str = "late";
    pub const EXCUSED: &'static str = "excused";
}

impl<'de> Deserialize<'de> for AttendanceStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            AttendanceStatus::PRESENT => Ok(AttendanceStatus::Present),
            AttendanceStatus::ABSENT => Ok(AttendanceStatus::Absent),
            AttendanceStatus::LATE => Ok(AttendanceStatus::Late),
            AttendanceStatus::EXCUSED => Ok(AttendanceStatus::Excused),
            _ => Err(serde::de::Error::custom(format!(
                "无效的考勤状态: '{s}'. 支持的状态: present, absent, late, excused"
            ))),
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "{}", AttendanceStatus::PRESENT),
            AttendanceStatus::Absent => write!(f, "{}", AttendanceStatus::ABSENT),
            AttendanceStatus::Late => write!(f, "{}", AttendanceStatus::LATE),
            AttendanceStatus::Excused => write!(f, "{}", AttendanceStatus::EXCUSED),
        }
    }
}

impl std::str::FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(AttendanceStatus::Present),
            "absent" => Ok(AttendanceStatus::Absent),
            "late" => Ok(AttendanceStatus::Late),
            "excused" => Ok(AttendanceStatus::Excused),
            _ => Err(format!("Invalid attendance status: {s}")),
        }
    }
}

// 考勤记录，(class_id, student_id, date) 唯一
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct Attendance {
    pub id: i64,
    pub class_id: i64,
    pub student_id: i64,
    pub date: chrono::NaiveDate,
    pub status: AttendanceStatus,
    pub note: Option<String>,
    // 记录人（教师）ID
    pub recorded_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_attendance_status_round_trip() {
        for status in [
            AttendanceStatus::Present,
            AttendanceStatus::Absent,
            AttendanceStatus::Late,
            AttendanceStatus::Excused,
        ] {
            let parsed = AttendanceStatus::from_str(&status.to_string()).unwrap();
            assert_eq!(parsed, status);
        }
        assert!(AttendanceStatus::from_str("sick").is_err());
    }

    #[test]
    fn test_attendance_status_deserialize() {
        let status: AttendanceStatus = serde_json::from_str(r#""late""#).unwrap();
        assert_eq!(status, AttendanceStatus::Late);

        let bad: Result<AttendanceStatus, _> = serde_json::from_str(r#""vacation""#);
        assert!(bad.is_err());
    }
}
