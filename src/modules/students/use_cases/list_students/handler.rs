use crate::modules::students::adapters::outbound::repository::{StudentOrder, StudentRepository};
use crate::modules::students::core::student::Student;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::contains_ignore_case;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentQuery {
    /// Matched against name, student code and email.
    pub search: Option<String>,
    pub order: StudentOrder,
}

pub async fn list(
    students: &dyn StudentRepository,
    query: &StudentQuery,
) -> Result<Vec<Student>, ApplicationError> {
    let needle = query.search.as_deref().map(str::trim).unwrap_or_default();
    Ok(students
        .list(query.order)
        .await?
        .into_iter()
        .filter(|s| {
            contains_ignore_case(&s.name, needle)
                || contains_ignore_case(&s.student_id, needle)
                || contains_ignore_case(&s.email, needle)
        })
        .collect())
}

pub async fn get(students: &dyn StudentRepository, id: &str) -> Result<Student, ApplicationError> {
    students
        .get(id)
        .await?
        .ok_or_else(|| ApplicationError::not_found("student", id))
}
