use async_graphql::{Context, Enum, Object, Result as GqlResult};

use crate::modules::attendance::core::outcome::ScanOutcome;
use crate::modules::attendance::core::record::{AttendanceRecord, AttendanceStatus};
use crate::modules::attendance::use_cases::scan_attendance::command::ScanMode;
use crate::modules::attendance::use_cases::scan_attendance::handler::{ScanRequest, ScanResult};
use crate::modules::students::use_cases::list_students::inbound::graphql::GqlStudent;
use crate::shared::core::primitives::{new_id, now_millis};
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Debug, PartialEq, Eq)]
#[graphql(name = "ScanMode", remote = "ScanMode")]
pub enum GqlScanMode {
    TimeIn,
    TimeOut,
}

#[derive(Enum, Copy, Clone, Debug, PartialEq, Eq)]
#[graphql(name = "ScanOutcome", remote = "ScanOutcome")]
pub enum GqlScanOutcome {
    CheckedIn,
    CheckedOut,
    AlreadyCheckedIn,
    AlreadyCheckedOut,
    NotCheckedIn,
}

#[derive(Enum, Copy, Clone, Debug, PartialEq, Eq)]
#[graphql(name = "AttendanceStatus", remote = "AttendanceStatus")]
pub enum GqlAttendanceStatus {
    Present,
    Late,
    Absent,
    Excused,
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlAttendanceRecord {
    pub id: String,
    pub student_id: String,
    pub event_id: String,
    pub time_in: Option<i64>,
    pub time_out: Option<i64>,
    pub status: GqlAttendanceStatus,
    pub recorded_by: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<AttendanceRecord> for GqlAttendanceRecord {
    fn from(r: AttendanceRecord) -> Self {
        Self {
            id: r.id,
            student_id: r.student_id,
            event_id: r.event_id,
            time_in: r.time_in,
            time_out: r.time_out,
            status: r.status.into(),
            recorded_by: r.recorded_by,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlScanResult {
    pub outcome: GqlScanOutcome,
    pub student: GqlStudent,
    pub record: Option<GqlAttendanceRecord>,
}

impl From<ScanResult> for GqlScanResult {
    fn from(r: ScanResult) -> Self {
        Self {
            outcome: r.outcome.into(),
            student: r.student.into(),
            record: r.record.map(Into::into),
        }
    }
}

#[derive(Default)]
pub struct ScanMutation;

#[Object]
impl ScanMutation {
    async fn scan_attendance(
        &self,
        context: &Context<'_>,
        payload: String,
        event_id: String,
        mode: GqlScanMode,
        recorded_by: Option<String>,
    ) -> GqlResult<GqlScanResult> {
        let state = context.data_unchecked::<AppState>();

        let result = state
            .scan_handler
            .handle(ScanRequest {
                payload,
                event_id,
                mode: ScanMode::from(mode),
                recorded_by,
                scanned_at: now_millis(),
                record_id: new_id(),
            })
            .await?;

        Ok(result.into())
    }
}
