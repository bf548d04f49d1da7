use crate::shared::core::primitives::EpochMillis;
use crate::shared::core::qr_payload::QrPayload;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    /// Institution-issued student code, as typed by staff.
    pub student_id: String,
    pub name: String,
    pub email: String,
    pub qr_code: Option<String>,
    pub created_at: EpochMillis,
    pub updated_at: EpochMillis,
}

impl Student {
    pub fn qr_payload(&self) -> QrPayload {
        QrPayload::new(&self.id, &self.name, &self.email)
    }
}

/// The staff-editable part of a student.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StudentDetails {
    pub student_id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StudentValidationError {
    #[error("student id is required")]
    MissingStudentCode,

    #[error("name must be at least 2 characters")]
    NameTooShort,

    #[error("email address is not valid")]
    InvalidEmail,
}

impl StudentDetails {
    /// Trims every field and checks the form rules.
    pub fn validate(self) -> Result<Self, StudentValidationError> {
        let details = Self {
            student_id: self.student_id.trim().to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
        };
        if details.student_id.is_empty() {
            return Err(StudentValidationError::MissingStudentCode);
        }
        if details.name.chars().count() < 2 {
            return Err(StudentValidationError::NameTooShort);
        }
        if !is_email(&details.email) {
            return Err(StudentValidationError::InvalidEmail);
        }
        Ok(details)
    }
}

fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}
