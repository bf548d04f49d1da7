use crate::modules::attendance::adapters::outbound::repository::AttendanceRepository;
use crate::modules::attendance::core::record::{AttendanceRecord, AttendanceStatus};
use crate::modules::events::adapters::outbound::repository::EventRepository;
use crate::modules::students::adapters::outbound::repository::{StudentOrder, StudentRepository};
use crate::modules::students::core::student::Student;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::contains_ignore_case;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attendee {
    #[serde(flatten)]
    pub record: AttendanceRecord,
    pub student: Student,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendeeFilter {
    /// Matched against the student's name, code and email.
    pub search: Option<String>,
    pub status: Option<AttendanceStatus>,
}

impl AttendeeFilter {
    fn matches(&self, attendee: &Attendee) -> bool {
        let search = self.search.as_deref().map(str::trim).unwrap_or_default();
        let student = &attendee.student;
        let by_search = contains_ignore_case(&student.name, search)
            || contains_ignore_case(&student.student_id, search)
            || contains_ignore_case(&student.email, search);
        let by_status = self
            .status
            .is_none_or(|status| attendee.record.status == status);
        by_search && by_status
    }
}

pub async fn handle(
    events: &dyn EventRepository,
    students: &dyn StudentRepository,
    attendance: &dyn AttendanceRepository,
    event_id: &str,
    filter: &AttendeeFilter,
) -> Result<Vec<Attendee>, ApplicationError> {
    if events.get(event_id).await?.is_none() {
        return Err(ApplicationError::not_found("event", event_id));
    }

    let by_id: HashMap<String, Student> = students
        .list(StudentOrder::default())
        .await?
        .into_iter()
        .map(|s| (s.id.clone(), s))
        .collect();

    let attendees = attendance
        .list_by_event(event_id)
        .await?
        .into_iter()
        .filter_map(|record| {
            by_id
                .get(&record.student_id)
                .cloned()
                .map(|student| Attendee { record, student })
        })
        .filter(|attendee| filter.matches(attendee))
        .collect();

    Ok(attendees)
}
