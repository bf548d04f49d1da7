use crate::modules::attendance::core::record::{AttendanceRecord, AttendanceStatus};
use crate::shared::core::primitives::EpochMillis;
use crate::shared::infrastructure::store::StoreError;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted(AttendanceRecord),
    /// A row for the same (student, event) pair already existed; nothing was written.
    Existing(AttendanceRecord),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapOutcome {
    Swapped(AttendanceRecord),
    /// The stored row no longer matched the expected one. Carries the current
    /// row, or `None` if it was deleted in the meantime.
    Stale(Option<AttendanceRecord>),
}

#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    async fn find_by_pair(
        &self,
        student_id: &str,
        event_id: &str,
    ) -> Result<Option<AttendanceRecord>, StoreError>;

    async fn get(&self, id: &str) -> Result<Option<AttendanceRecord>, StoreError>;

    /// Inserts the row unless one already exists for its (student, event) pair.
    async fn insert_if_absent(&self, record: AttendanceRecord)
    -> Result<InsertOutcome, StoreError>;

    /// Replaces `expected` with `next` only if the stored row still equals `expected`.
    async fn compare_and_swap(
        &self,
        expected: &AttendanceRecord,
        next: AttendanceRecord,
    ) -> Result<SwapOutcome, StoreError>;

    /// Unconditional status override. Returns `None` when the id is unknown.
    async fn set_status(
        &self,
        id: &str,
        status: AttendanceStatus,
        updated_at: EpochMillis,
    ) -> Result<Option<AttendanceRecord>, StoreError>;

    async fn list_by_event(&self, event_id: &str) -> Result<Vec<AttendanceRecord>, StoreError>;

    async fn list_all(&self) -> Result<Vec<AttendanceRecord>, StoreError>;
}
