use crate::modules::students::adapters::outbound::repository::StudentRepository;
use crate::shared::core::errors::ApplicationError;

/// Removes the student and its attendance rows. Returns how many rows went with it.
pub async fn handle(students: &dyn StudentRepository, id: &str) -> Result<usize, ApplicationError> {
    let removed = students
        .delete_cascading(id)
        .await?
        .ok_or_else(|| ApplicationError::not_found("student", id))?;
    tracing::info!(id, removed_attendance = removed, "student deleted");
    Ok(removed)
}
