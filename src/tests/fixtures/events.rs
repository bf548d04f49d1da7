use crate::modules::events::core::event::Event;
use crate::tests::fixtures::FIXED_NOW;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct EventDto {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_date: i64,
    pub end_date: i64,
}

pub fn fixed_event_dto() -> EventDto {
    serde_json::from_str(include_str!("json/event.json")).expect("invalid event fixture")
}

pub struct EventBuilder {
    inner: Event,
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBuilder {
    pub fn new() -> Self {
        let dto = fixed_event_dto();
        Self {
            inner: Event {
                id: dto.id,
                title: dto.title,
                description: dto.description,
                location: dto.location,
                start_date: dto.start_date,
                end_date: dto.end_date,
                created_by: "staff-fixed-0001".to_string(),
                created_at: FIXED_NOW,
                updated_at: FIXED_NOW,
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn start_date(mut self, v: i64) -> Self {
        self.inner.start_date = v;
        self
    }

    pub fn end_date(mut self, v: i64) -> Self {
        self.inner.end_date = v;
        self
    }

    pub fn build(self) -> Event {
        self.inner
    }
}
