use crate::shared::core::primitives::EpochMillis;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Late,
    Absent,
    Excused,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 4] = [
        AttendanceStatus::Present,
        AttendanceStatus::Late,
        AttendanceStatus::Absent,
        AttendanceStatus::Excused,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Late => "late",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Excused => "excused",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown attendance status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for AttendanceStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        AttendanceStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| UnknownStatus(value.to_string()))
    }
}

/// One row per (student, event) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: String,
    pub student_id: String,
    pub event_id: String,
    pub time_in: Option<EpochMillis>,
    pub time_out: Option<EpochMillis>,
    pub status: AttendanceStatus,
    pub recorded_by: Option<String>,
    pub created_at: EpochMillis,
    pub updated_at: EpochMillis,
}

#[cfg(test)]
mod attendance_record_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("present", AttendanceStatus::Present)]
    #[case("Late", AttendanceStatus::Late)]
    #[case(" ABSENT ", AttendanceStatus::Absent)]
    #[case("excused", AttendanceStatus::Excused)]
    fn it_should_parse_statuses(#[case] raw: &str, #[case] expected: AttendanceStatus) {
        assert_eq!(raw.parse::<AttendanceStatus>(), Ok(expected));
    }

    #[rstest]
    fn it_should_reject_unknown_statuses() {
        assert_eq!(
            "tardy".parse::<AttendanceStatus>(),
            Err(UnknownStatus("tardy".into()))
        );
    }

    #[rstest]
    fn it_should_serialise_statuses_in_lowercase() {
        let json = serde_json::to_value(AttendanceStatus::Excused).unwrap();
        assert_eq!(json, serde_json::json!("excused"));
    }
}
