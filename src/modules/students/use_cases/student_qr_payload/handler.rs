use crate::modules::students::adapters::outbound::repository::StudentRepository;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::qr_payload::QrPayload;

pub async fn handle(
    students: &dyn StudentRepository,
    id: &str,
) -> Result<QrPayload, ApplicationError> {
    let student = students
        .get(id)
        .await?
        .ok_or_else(|| ApplicationError::not_found("student", id))?;
    Ok(student.qr_payload())
}
