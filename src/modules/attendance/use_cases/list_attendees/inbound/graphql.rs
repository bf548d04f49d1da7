use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::attendance::use_cases::list_attendees::handler::{
    self, Attendee, AttendeeFilter,
};
use crate::modules::attendance::use_cases::scan_attendance::inbound::graphql::{
    GqlAttendanceRecord, GqlAttendanceStatus,
};
use crate::modules::students::use_cases::list_students::inbound::graphql::GqlStudent;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlAttendee {
    pub record: GqlAttendanceRecord,
    pub student: GqlStudent,
}

impl From<Attendee> for GqlAttendee {
    fn from(a: Attendee) -> Self {
        Self {
            record: a.record.into(),
            student: a.student.into(),
        }
    }
}

#[derive(Default)]
pub struct AttendeesQuery;

#[Object]
impl AttendeesQuery {
    /// Omitting `status` lists every attendee.
    async fn attendees(
        &self,
        context: &Context<'_>,
        event_id: String,
        search: Option<String>,
        status: Option<GqlAttendanceStatus>,
    ) -> GqlResult<Vec<GqlAttendee>> {
        let state = context.data_unchecked::<AppState>();
        let list = handler::handle(
            state.events.as_ref(),
            state.students.as_ref(),
            state.attendance.as_ref(),
            &event_id,
            &AttendeeFilter {
                search,
                status: status.map(Into::into),
            },
        )
        .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
