use crate::modules::events::adapters::outbound::repository::EventRepository;
use crate::modules::events::core::event::{Event, EventDetails};
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::EpochMillis;

pub async fn handle(
    events: &dyn EventRepository,
    id: &str,
    details: EventDetails,
    updated_at: EpochMillis,
) -> Result<Event, ApplicationError> {
    let details = details
        .validate()
        .map_err(|e| ApplicationError::Validation(e.to_string()))?;
    let current = events
        .get(id)
        .await?
        .ok_or_else(|| ApplicationError::not_found("event", id))?;

    let next = Event {
        title: details.title,
        description: details.description,
        location: details.location,
        start_date: details.start_date,
        end_date: details.end_date,
        updated_at,
        ..current
    };
    events
        .update(next)
        .await?
        .ok_or_else(|| ApplicationError::not_found("event", id))
}
