use crate::shared::core::primitives::EpochMillis;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_date: EpochMillis,
    pub end_date: EpochMillis,
    pub created_by: String,
    pub created_at: EpochMillis,
    pub updated_at: EpochMillis,
}

/// The staff-editable part of an event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EventDetails {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub start_date: EpochMillis,
    pub end_date: EpochMillis,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EventValidationError {
    #[error("title must be at least 2 characters")]
    TitleTooShort,

    #[error("end date/time must be after start date/time")]
    InvalidInterval,
}

impl EventDetails {
    /// Trims the text fields, drops blank optionals and checks the form rules.
    pub fn validate(self) -> Result<Self, EventValidationError> {
        let title = self.title.trim().to_string();
        if title.chars().count() < 2 {
            return Err(EventValidationError::TitleTooShort);
        }
        if self.end_date <= self.start_date {
            return Err(EventValidationError::InvalidInterval);
        }
        Ok(Self {
            title,
            description: non_blank(self.description),
            location: non_blank(self.location),
            start_date: self.start_date,
            end_date: self.end_date,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
