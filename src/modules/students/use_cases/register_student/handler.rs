use crate::modules::students::adapters::outbound::repository::StudentRepository;
use crate::modules::students::core::student::Student;
use crate::modules::students::use_cases::register_student::command::RegisterStudent;
use crate::shared::core::errors::ApplicationError;

pub async fn handle(
    students: &dyn StudentRepository,
    command: RegisterStudent,
) -> Result<Student, ApplicationError> {
    let details = command
        .details
        .validate()
        .map_err(|e| ApplicationError::Validation(e.to_string()))?;

    let student = Student {
        id: command.id,
        student_id: details.student_id,
        name: details.name,
        email: details.email,
        qr_code: Some(command.qr_code),
        created_at: command.registered_at,
        updated_at: command.registered_at,
    };
    students.insert(student.clone()).await?;
    tracing::info!(id = %student.id, student_id = %student.student_id, "student registered");
    Ok(student)
}
