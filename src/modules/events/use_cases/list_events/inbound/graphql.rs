use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::events::core::event::Event;
use crate::modules::events::use_cases::list_events::handler::{self, EventQuery};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlEvent {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_date: i64,
    pub end_date: i64,
    pub created_by: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Event> for GqlEvent {
    fn from(e: Event) -> Self {
        Self {
            id: e.id,
            title: e.title,
            description: e.description,
            location: e.location,
            start_date: e.start_date,
            end_date: e.end_date,
            created_by: e.created_by,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

#[derive(Default)]
pub struct EventsQuery;

#[Object]
impl EventsQuery {
    async fn events(
        &self,
        context: &Context<'_>,
        search: Option<String>,
        limit: Option<i64>,
    ) -> GqlResult<Vec<GqlEvent>> {
        let state = context.data_unchecked::<AppState>();
        let query = EventQuery {
            search,
            limit: limit.map(|l| l.max(0) as usize),
        };
        let list = handler::list(state.events.as_ref(), &query).await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    async fn event(&self, context: &Context<'_>, id: String) -> GqlResult<GqlEvent> {
        let state = context.data_unchecked::<AppState>();
        Ok(handler::get(state.events.as_ref(), &id).await?.into())
    }
}
