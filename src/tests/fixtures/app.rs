use crate::modules::events::adapters::outbound::repository::EventRepository;
use crate::modules::events::core::event::Event;
use crate::modules::students::adapters::outbound::repository::StudentRepository;
use crate::modules::students::core::student::Student;
use crate::shared::infrastructure::notifier::in_memory::InMemoryNotifier;
use crate::shared::infrastructure::store::in_memory::InMemoryStore;
use crate::shell::state::AppState;
use crate::tests::fixtures::events::EventBuilder;
use crate::tests::fixtures::students::StudentBuilder;
use axum::response::Response;
use http_body_util::BodyExt;
use std::sync::Arc;

/// Application state over in-memory adapters, with handles kept for assertions.
pub struct TestApp {
    pub state: AppState,
    pub store: Arc<InMemoryStore>,
    pub notifier: Arc<InMemoryNotifier>,
}

fn assemble(store: InMemoryStore, notifier: InMemoryNotifier) -> TestApp {
    let store = Arc::new(store);
    let notifier = Arc::new(notifier);
    let state = AppState::new(
        store.clone(),
        store.clone(),
        store.clone(),
        notifier.clone(),
    );
    TestApp {
        state,
        store,
        notifier,
    }
}

pub fn make_test_state() -> TestApp {
    assemble(InMemoryStore::new(), InMemoryNotifier::new())
}

pub fn make_offline_store_state() -> TestApp {
    let mut store = InMemoryStore::new();
    store.toggle_offline();
    assemble(store, InMemoryNotifier::new())
}

pub fn make_offline_notifier_state() -> TestApp {
    let mut notifier = InMemoryNotifier::new();
    notifier.toggle_offline();
    assemble(InMemoryStore::new(), notifier)
}

/// Seeds the fixed student and event.
pub async fn seed_student_and_event(app: &TestApp) -> (Student, Event) {
    let student = StudentBuilder::new().build();
    let event = EventBuilder::new().build();
    StudentRepository::insert(app.store.as_ref(), student.clone())
        .await
        .expect("seed student failed");
    EventRepository::insert(app.store.as_ref(), event.clone())
        .await
        .expect("seed event failed");
    (student, event)
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body read failed")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is not json")
}
