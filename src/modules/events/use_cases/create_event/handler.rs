use crate::modules::events::adapters::outbound::repository::EventRepository;
use crate::modules::events::core::event::Event;
use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::shared::core::errors::ApplicationError;

pub async fn handle(
    events: &dyn EventRepository,
    command: CreateEvent,
) -> Result<Event, ApplicationError> {
    let created_by = command.created_by.trim().to_string();
    if created_by.is_empty() {
        return Err(ApplicationError::Validation("created_by is required".into()));
    }
    let details = command
        .details
        .validate()
        .map_err(|e| ApplicationError::Validation(e.to_string()))?;

    let event = Event {
        id: command.id,
        title: details.title,
        description: details.description,
        location: details.location,
        start_date: details.start_date,
        end_date: details.end_date,
        created_by,
        created_at: command.created_at,
        updated_at: command.created_at,
    };
    events.insert(event.clone()).await?;
    tracing::info!(id = %event.id, title = %event.title, "event created");
    Ok(event)
}
