use crate::modules::attendance::core::record::AttendanceRecord;

/// Where a (student, event) pair stands in the scan lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendanceState {
    NoRecord,
    /// A row exists but carries no time-in yet. Scans treat it like
    /// `NoRecord`, except that a time-in stamps the existing row.
    Unstamped(AttendanceRecord),
    CheckedIn(AttendanceRecord),
    Complete(AttendanceRecord),
}

impl AttendanceState {
    pub fn from_record(record: Option<AttendanceRecord>) -> Self {
        match record {
            None => AttendanceState::NoRecord,
            Some(r) if r.time_in.is_none() => AttendanceState::Unstamped(r),
            Some(r) if r.time_out.is_none() => AttendanceState::CheckedIn(r),
            Some(r) => AttendanceState::Complete(r),
        }
    }

    pub fn record(&self) -> Option<&AttendanceRecord> {
        match self {
            AttendanceState::NoRecord => None,
            AttendanceState::Unstamped(r)
            | AttendanceState::CheckedIn(r)
            | AttendanceState::Complete(r) => Some(r),
        }
    }
}
