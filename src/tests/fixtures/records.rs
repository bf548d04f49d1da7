use crate::modules::attendance::core::record::{AttendanceRecord, AttendanceStatus};
use crate::tests::fixtures::events::fixed_event_dto;
use crate::tests::fixtures::students::fixed_student_dto;

pub const FIXED_TIME_IN: i64 = 1_700_000_100_000;

pub struct AttendanceRecordBuilder {
    inner: AttendanceRecord,
}

impl Default for AttendanceRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AttendanceRecordBuilder {
    /// A checked-in row for the fixed student at the fixed event.
    pub fn new() -> Self {
        Self {
            inner: AttendanceRecord {
                id: "att-fixed-0001".to_string(),
                student_id: fixed_student_dto().id,
                event_id: fixed_event_dto().id,
                time_in: Some(FIXED_TIME_IN),
                time_out: None,
                status: AttendanceStatus::Present,
                recorded_by: None,
                created_at: FIXED_TIME_IN,
                updated_at: FIXED_TIME_IN,
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn student_id(mut self, v: impl Into<String>) -> Self {
        self.inner.student_id = v.into();
        self
    }

    pub fn event_id(mut self, v: impl Into<String>) -> Self {
        self.inner.event_id = v.into();
        self
    }

    pub fn time_in(mut self, v: Option<i64>) -> Self {
        self.inner.time_in = v;
        self
    }

    pub fn time_out(mut self, v: Option<i64>) -> Self {
        self.inner.time_out = v;
        self
    }

    pub fn status(mut self, v: AttendanceStatus) -> Self {
        self.inner.status = v;
        self
    }

    pub fn build(self) -> AttendanceRecord {
        self.inner
    }
}
