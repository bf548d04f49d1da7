use crate::modules::attendance::adapters::outbound::repository::{
    AttendanceRepository, InsertOutcome, SwapOutcome,
};
use crate::modules::attendance::core::confirmation::{Recipient, compose_confirmation};
use crate::modules::attendance::core::outcome::ScanOutcome;
use crate::modules::attendance::core::record::AttendanceRecord;
use crate::modules::attendance::core::state::AttendanceState;
use crate::modules::attendance::use_cases::scan_attendance::command::{ScanAttendance, ScanMode};
use crate::modules::attendance::use_cases::scan_attendance::decide::decide_scan;
use crate::modules::attendance::use_cases::scan_attendance::decision::{Decision, Mutation};
use crate::modules::events::adapters::outbound::repository::EventRepository;
use crate::modules::events::core::event::Event;
use crate::modules::students::adapters::outbound::repository::StudentRepository;
use crate::modules::students::core::student::Student;
use crate::shared::core::primitives::EpochMillis;
use crate::shared::core::qr_payload::{DecodeError, QrPayload};
use crate::shared::infrastructure::notifier::Notifier;
use crate::shared::infrastructure::store::StoreError;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Attempts before a pair that keeps changing under us is reported as a conflict.
const MAX_ATTEMPTS: usize = 3;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error(transparent)]
    InvalidPayload(#[from] DecodeError),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error(transparent)]
    StoreUnavailable(#[from] StoreError),
}

/// A raw scan as it arrives from a scanner client.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    pub payload: String,
    pub event_id: String,
    pub mode: ScanMode,
    pub recorded_by: Option<String>,
    pub scanned_at: EpochMillis,
    /// Id for the attendance row, used only if this scan creates one.
    pub record_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    pub outcome: ScanOutcome,
    pub student: Student,
    /// The pair's row after the scan, if one exists.
    pub record: Option<AttendanceRecord>,
}

enum Applied {
    Written(AttendanceRecord),
    Lost(Option<AttendanceRecord>),
}

pub struct ScanAttendanceHandler {
    students: Arc<dyn StudentRepository>,
    events: Arc<dyn EventRepository>,
    attendance: Arc<dyn AttendanceRepository>,
    notifier: Arc<dyn Notifier>,
}

impl ScanAttendanceHandler {
    pub fn new(
        students: Arc<dyn StudentRepository>,
        events: Arc<dyn EventRepository>,
        attendance: Arc<dyn AttendanceRepository>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            students,
            events,
            attendance,
            notifier,
        }
    }

    pub async fn handle(&self, request: ScanRequest) -> Result<ScanResult, ScanError> {
        let payload = QrPayload::decode(&request.payload)?;

        let student = self
            .students
            .get(&payload.id)
            .await?
            .ok_or_else(|| ScanError::NotFound {
                entity: "student",
                id: payload.id.clone(),
            })?;
        let event = self
            .events
            .get(&request.event_id)
            .await?
            .ok_or_else(|| ScanError::NotFound {
                entity: "event",
                id: request.event_id.clone(),
            })?;

        let command = ScanAttendance {
            record_id: request.record_id,
            student_id: student.id.clone(),
            event_id: event.id.clone(),
            mode: request.mode,
            scanned_at: request.scanned_at,
            recorded_by: request.recorded_by,
        };

        let mut current = self
            .attendance
            .find_by_pair(&command.student_id, &command.event_id)
            .await?;

        for _ in 0..MAX_ATTEMPTS {
            let state = AttendanceState::from_record(current);
            match decide_scan(&state, &command) {
                Decision::Unchanged { outcome } => {
                    tracing::info!(
                        student_id = %student.id,
                        event_id = %event.id,
                        %outcome,
                        "scan left attendance unchanged"
                    );
                    return Ok(ScanResult {
                        outcome,
                        student,
                        record: state.record().cloned(),
                    });
                }
                Decision::Accepted { mutation, outcome } => match self.apply(mutation).await? {
                    Applied::Written(record) => {
                        tracing::info!(
                            student_id = %student.id,
                            event_id = %event.id,
                            record_id = %record.id,
                            %outcome,
                            "scan recorded"
                        );
                        self.notify(&student, &event, &record).await;
                        return Ok(ScanResult {
                            outcome,
                            student,
                            record: Some(record),
                        });
                    }
                    Applied::Lost(latest) => {
                        tracing::debug!(
                            student_id = %student.id,
                            event_id = %event.id,
                            "attendance changed concurrently, re-evaluating scan"
                        );
                        current = latest;
                    }
                },
            }
        }

        Err(ScanError::StoreUnavailable(StoreError::Conflict(format!(
            "attendance for student {} at event {} kept changing",
            student.id, event.id
        ))))
    }

    async fn apply(&self, mutation: Mutation) -> Result<Applied, StoreError> {
        match mutation {
            Mutation::Create(record) => match self.attendance.insert_if_absent(record).await? {
                InsertOutcome::Inserted(record) => Ok(Applied::Written(record)),
                InsertOutcome::Existing(existing) => Ok(Applied::Lost(Some(existing))),
            },
            Mutation::Replace { expected, next } => {
                match self.attendance.compare_and_swap(&expected, next).await? {
                    SwapOutcome::Swapped(record) => Ok(Applied::Written(record)),
                    SwapOutcome::Stale(current) => Ok(Applied::Lost(current)),
                }
            }
        }
    }

    async fn notify(&self, student: &Student, event: &Event, record: &AttendanceRecord) {
        let recipient = Recipient {
            name: student.name.clone(),
            email: student.email.clone(),
        };
        let message =
            match compose_confirmation(&recipient, &event.title, record.time_in, record.time_out) {
                Ok(message) => message,
                Err(e) => {
                    tracing::warn!(record_id = %record.id, error = %e, "confirmation not composed");
                    return;
                }
            };
        match self.notifier.send(message).await {
            Ok(receipt) => tracing::debug!(
                record_id = %record.id,
                message_id = %receipt.message_id,
                "confirmation sent"
            ),
            Err(e) => tracing::warn!(
                record_id = %record.id,
                to = %student.email,
                error = %e,
                "confirmation delivery failed"
            ),
        }
    }
}
