use crate::modules::events::core::event::Event;
use crate::shared::infrastructure::store::StoreError;
use async_trait::async_trait;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn insert(&self, event: Event) -> Result<(), StoreError>;

    /// Replaces the stored event. Returns `None` when the id is unknown.
    async fn update(&self, event: Event) -> Result<Option<Event>, StoreError>;

    async fn get(&self, id: &str) -> Result<Option<Event>, StoreError>;

    /// Events ordered by start date, latest first, optionally capped.
    async fn list(&self, limit: Option<usize>) -> Result<Vec<Event>, StoreError>;

    /// Deletes the event together with its attendance rows, atomically.
    /// Returns the number of attendance rows removed, or `None` when the id is unknown.
    async fn delete_cascading(&self, id: &str) -> Result<Option<usize>, StoreError>;
}
