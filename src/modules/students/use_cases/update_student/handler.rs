use crate::modules::students::adapters::outbound::repository::StudentRepository;
use crate::modules::students::core::student::{Student, StudentDetails};
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::EpochMillis;

/// Replaces the editable fields; the id, QR marker and creation time are kept.
pub async fn handle(
    students: &dyn StudentRepository,
    id: &str,
    details: StudentDetails,
    updated_at: EpochMillis,
) -> Result<Student, ApplicationError> {
    let details = details
        .validate()
        .map_err(|e| ApplicationError::Validation(e.to_string()))?;
    let current = students
        .get(id)
        .await?
        .ok_or_else(|| ApplicationError::not_found("student", id))?;

    let next = Student {
        student_id: details.student_id,
        name: details.name,
        email: details.email,
        updated_at,
        ..current
    };
    students
        .update(next)
        .await?
        .ok_or_else(|| ApplicationError::not_found("student", id))
}
