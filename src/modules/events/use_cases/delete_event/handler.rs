use crate::modules::events::adapters::outbound::repository::EventRepository;
use crate::shared::core::errors::ApplicationError;

/// Removes the event and its attendance rows. Returns how many rows went with it.
pub async fn handle(events: &dyn EventRepository, id: &str) -> Result<usize, ApplicationError> {
    let removed = events
        .delete_cascading(id)
        .await?
        .ok_or_else(|| ApplicationError::not_found("event", id))?;
    tracing::info!(id, removed_attendance = removed, "event deleted");
    Ok(removed)
}
