// Pure decision function for a scan.
//
// Responsibilities
// - Map (current state, scan mode) to the row mutation and the outcome.
// - Stamp check-ins as present; never let a time-out precede the time-in.
// - Never perform input or output.

use crate::modules::attendance::core::outcome::ScanOutcome;
use crate::modules::attendance::core::record::{AttendanceRecord, AttendanceStatus};
use crate::modules::attendance::core::state::AttendanceState;
use crate::modules::attendance::use_cases::scan_attendance::command::{ScanAttendance, ScanMode};
use crate::modules::attendance::use_cases::scan_attendance::decision::{Decision, Mutation};

pub fn decide_scan(state: &AttendanceState, command: &ScanAttendance) -> Decision {
    let at = command.scanned_at;
    match (state, command.mode) {
        (AttendanceState::NoRecord, ScanMode::TimeIn) => Decision::Accepted {
            mutation: Mutation::Create(AttendanceRecord {
                id: command.record_id.clone(),
                student_id: command.student_id.clone(),
                event_id: command.event_id.clone(),
                time_in: Some(at),
                time_out: None,
                status: AttendanceStatus::Present,
                recorded_by: command.recorded_by.clone(),
                created_at: at,
                updated_at: at,
            }),
            outcome: ScanOutcome::CheckedIn,
        },
        (AttendanceState::Unstamped(record), ScanMode::TimeIn) => Decision::Accepted {
            mutation: Mutation::Replace {
                expected: record.clone(),
                next: AttendanceRecord {
                    time_in: Some(at),
                    status: AttendanceStatus::Present,
                    recorded_by: command
                        .recorded_by
                        .clone()
                        .or_else(|| record.recorded_by.clone()),
                    updated_at: at,
                    ..record.clone()
                },
            },
            outcome: ScanOutcome::CheckedIn,
        },
        (AttendanceState::NoRecord | AttendanceState::Unstamped(_), ScanMode::TimeOut) => {
            Decision::Unchanged {
                outcome: ScanOutcome::NotCheckedIn,
            }
        }
        (AttendanceState::CheckedIn(_) | AttendanceState::Complete(_), ScanMode::TimeIn) => {
            Decision::Unchanged {
                outcome: ScanOutcome::AlreadyCheckedIn,
            }
        }
        (AttendanceState::CheckedIn(record), ScanMode::TimeOut) => {
            let time_out = record.time_in.map_or(at, |time_in| at.max(time_in));
            Decision::Accepted {
                mutation: Mutation::Replace {
                    expected: record.clone(),
                    next: AttendanceRecord {
                        time_out: Some(time_out),
                        updated_at: at,
                        ..record.clone()
                    },
                },
                outcome: ScanOutcome::CheckedOut,
            }
        }
        (AttendanceState::Complete(_), ScanMode::TimeOut) => Decision::Unchanged {
            outcome: ScanOutcome::AlreadyCheckedOut,
        },
    }
}
