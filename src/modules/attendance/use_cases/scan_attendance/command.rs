use crate::shared::core::primitives::EpochMillis;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanMode {
    TimeIn,
    TimeOut,
}

/// A decoded scan, ready to be decided against the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanAttendance {
    /// Id given to the attendance row if this scan creates one.
    pub record_id: String,
    pub student_id: String,
    pub event_id: String,
    pub mode: ScanMode,
    pub scanned_at: EpochMillis,
    pub recorded_by: Option<String>,
}
