use crate::modules::events::adapters::outbound::repository::EventRepository;
use crate::modules::events::core::event::Event;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::contains_ignore_case;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventQuery {
    /// Matched against title, description and location.
    pub search: Option<String>,
    pub limit: Option<usize>,
}

/// Events by start date, latest first.
pub async fn list(
    events: &dyn EventRepository,
    query: &EventQuery,
) -> Result<Vec<Event>, ApplicationError> {
    let needle = query.search.as_deref().map(str::trim).unwrap_or_default();
    if needle.is_empty() {
        return Ok(events.list(query.limit).await?);
    }
    let matching = events.list(None).await?.into_iter().filter(|e| {
        contains_ignore_case(&e.title, needle)
            || e.description
                .as_deref()
                .is_some_and(|d| contains_ignore_case(d, needle))
            || e.location
                .as_deref()
                .is_some_and(|l| contains_ignore_case(l, needle))
    });
    Ok(match query.limit {
        Some(limit) => matching.take(limit).collect(),
        None => matching.collect(),
    })
}

pub async fn get(events: &dyn EventRepository, id: &str) -> Result<Event, ApplicationError> {
    events
        .get(id)
        .await?
        .ok_or_else(|| ApplicationError::not_found("event", id))
}

#[cfg(test)]
mod list_events_handler_tests {
    use super::*;
    use crate::shared::infrastructure::store::in_memory::InMemoryStore;
    use crate::tests::fixtures::FIXED_NOW;
    use crate::tests::fixtures::events::EventBuilder;
    use rstest::{fixture, rstest};

    const DAY: i64 = 86_400_000;

    #[fixture]
    async fn before_each() -> InMemoryStore {
        let store = InMemoryStore::new();
        let events = [
            ("e-1", "Opening Keynote", 0),
            ("e-2", "Cloud Workshop", 1),
            ("e-3", "Closing Keynote", 2),
        ];
        for (id, title, day) in events {
            store
                .insert(
                    EventBuilder::new()
                        .id(id)
                        .title(title)
                        .start_date(FIXED_NOW + day * DAY)
                        .end_date(FIXED_NOW + day * DAY + 3_600_000)
                        .build(),
                )
                .await
                .expect("seed failed");
        }
        store
    }

    fn titles(events: &[Event]) -> Vec<&str> {
        events.iter().map(|e| e.title.as_str()).collect()
    }

    #[rstest]
    #[case(EventQuery::default(), vec!["Closing Keynote", "Cloud Workshop", "Opening Keynote"])]
    #[case(EventQuery { search: None, limit: Some(2) }, vec!["Closing Keynote", "Cloud Workshop"])]
    #[case(EventQuery { search: Some("keynote".into()), limit: None }, vec!["Closing Keynote", "Opening Keynote"])]
    #[case(EventQuery { search: Some("keynote".into()), limit: Some(1) }, vec!["Closing Keynote"])]
    #[case(EventQuery { search: Some("hall a".into()), limit: None }, vec!["Closing Keynote", "Cloud Workshop", "Opening Keynote"])]
    #[tokio::test]
    async fn it_should_list_latest_first_with_search_and_limit(
        #[future] before_each: InMemoryStore,
        #[case] query: EventQuery,
        #[case] expected: Vec<&str>,
    ) {
        let store = before_each.await;
        let events = list(&store, &query).await.expect("list failed");
        assert_eq!(titles(&events), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_get_one_or_report_not_found(#[future] before_each: InMemoryStore) {
        let store = before_each.await;
        assert_eq!(get(&store, "e-2").await.expect("get failed").title, "Cloud Workshop");
        assert!(matches!(
            get(&store, "missing").await,
            Err(ApplicationError::NotFound { .. })
        ));
    }
}
