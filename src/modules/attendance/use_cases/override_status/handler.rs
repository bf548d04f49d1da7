use crate::modules::attendance::adapters::outbound::repository::AttendanceRepository;
use crate::modules::attendance::core::record::{AttendanceRecord, AttendanceStatus};
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::EpochMillis;

/// Sets the status of an existing row. Any status may replace any other.
pub async fn handle(
    attendance: &dyn AttendanceRepository,
    record_id: &str,
    status: AttendanceStatus,
    updated_at: EpochMillis,
) -> Result<AttendanceRecord, ApplicationError> {
    let record = attendance
        .set_status(record_id, status, updated_at)
        .await?
        .ok_or_else(|| ApplicationError::not_found("attendance record", record_id))?;
    tracing::info!(record_id, %status, "attendance status overridden");
    Ok(record)
}
