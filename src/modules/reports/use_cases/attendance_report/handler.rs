use crate::modules::attendance::adapters::outbound::repository::AttendanceRepository;
use crate::modules::events::adapters::outbound::repository::EventRepository;
use crate::modules::reports::core::report::{AttendanceReport, ReportFilter, build_report};
use crate::shared::core::errors::ApplicationError;

pub async fn handle(
    events: &dyn EventRepository,
    attendance: &dyn AttendanceRepository,
    filter: &ReportFilter,
) -> Result<AttendanceReport, ApplicationError> {
    if let (Some(from), Some(to)) = (filter.from, filter.to) {
        if from >= to {
            return Err(ApplicationError::Validation("from must be before to".into()));
        }
    }
    if let Some(event_id) = &filter.event_id {
        if events.get(event_id).await?.is_none() {
            return Err(ApplicationError::not_found("event", event_id));
        }
    }

    let all_events = events.list(None).await?;
    let records = attendance.list_all().await?;
    Ok(build_report(&all_events, &records, filter))
}
