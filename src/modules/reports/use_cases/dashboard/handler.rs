use crate::modules::attendance::adapters::outbound::repository::AttendanceRepository;
use crate::modules::events::adapters::outbound::repository::EventRepository;
use crate::modules::events::core::event::Event;
use crate::modules::reports::core::stats::AttendanceStats;
use crate::modules::students::adapters::outbound::repository::{StudentOrder, StudentRepository};
use crate::shared::core::errors::ApplicationError;
use serde::Serialize;

pub const LATEST_EVENTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardEvent {
    #[serde(flatten)]
    pub event: Event,
    pub stats: AttendanceStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub latest_events: Vec<DashboardEvent>,
    pub stats: AttendanceStats,
    pub presence_rate: u32,
    pub total_students: usize,
}

pub async fn handle(
    students: &dyn StudentRepository,
    events: &dyn EventRepository,
    attendance: &dyn AttendanceRepository,
) -> Result<Dashboard, ApplicationError> {
    let latest = events.list(Some(LATEST_EVENTS)).await?;
    let records = attendance.list_all().await?;
    let total_students = students.list(StudentOrder::default()).await?.len();

    let stats = AttendanceStats::from_records(&records);
    let latest_events = latest
        .into_iter()
        .map(|event| {
            let stats =
                AttendanceStats::from_records(records.iter().filter(|r| r.event_id == event.id));
            DashboardEvent { event, stats }
        })
        .collect();

    Ok(Dashboard {
        latest_events,
        presence_rate: stats.presence_rate(),
        stats,
        total_students,
    })
}
