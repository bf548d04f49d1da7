use crate::modules::events::core::event::EventDetails;
use crate::shared::core::primitives::EpochMillis;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEvent {
    pub id: String,
    pub details: EventDetails,
    /// Staff member creating the event.
    pub created_by: String,
    pub created_at: EpochMillis,
}
