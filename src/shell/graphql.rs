use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::attendance::use_cases::list_attendees::inbound::graphql::AttendeesQuery;
use crate::modules::attendance::use_cases::scan_attendance::inbound::graphql::ScanMutation;
use crate::modules::events::use_cases::list_events::inbound::graphql::EventsQuery;
use crate::modules::reports::use_cases::attendance_report::inbound::graphql::ReportQuery;
use crate::modules::students::use_cases::list_students::inbound::graphql::StudentsQuery;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(StudentsQuery, EventsQuery, AttendeesQuery, ReportQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(ScanMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}
