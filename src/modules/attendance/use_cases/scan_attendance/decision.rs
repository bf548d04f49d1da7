use crate::modules::attendance::core::outcome::ScanOutcome;
use crate::modules::attendance::core::record::AttendanceRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Create(AttendanceRecord),
    /// Write `next` only if the stored row still equals `expected`.
    Replace {
        expected: AttendanceRecord,
        next: AttendanceRecord,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Accepted {
        mutation: Mutation,
        outcome: ScanOutcome,
    },
    Unchanged {
        outcome: ScanOutcome,
    },
}
