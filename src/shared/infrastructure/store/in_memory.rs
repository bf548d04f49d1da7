// In memory implementation of the student, event and attendance ports.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Keep all tables behind one lock so cascading deletes are atomic.
// - Enforce one attendance row per (student, event) pair and reject rows
//   pointing at unknown students or events.

use crate::modules::attendance::adapters::outbound::repository::{
    AttendanceRepository, InsertOutcome, SwapOutcome,
};
use crate::modules::attendance::core::record::{AttendanceRecord, AttendanceStatus};
use crate::modules::events::adapters::outbound::repository::EventRepository;
use crate::modules::events::core::event::Event;
use crate::modules::students::adapters::outbound::repository::{StudentOrder, StudentRepository};
use crate::modules::students::core::student::Student;
use crate::shared::core::primitives::EpochMillis;
use crate::shared::infrastructure::store::StoreError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    students: HashMap<String, Student>,
    events: HashMap<String, Event>,
    attendance: HashMap<String, AttendanceRecord>,
    pairs: HashMap<(String, String), String>,
}

impl Tables {
    fn remove_attendance_where<P>(&mut self, doomed: P) -> usize
    where
        P: Fn(&AttendanceRecord) -> bool,
    {
        let ids: Vec<String> = self
            .attendance
            .values()
            .filter(|&r| doomed(r))
            .map(|r| r.id.clone())
            .collect();
        for id in &ids {
            if let Some(r) = self.attendance.remove(id) {
                self.pairs.remove(&(r.student_id, r.event_id));
            }
        }
        ids.len()
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
    is_offline: bool,
    write_delay_ms: AtomicU64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Delays attendance writes before they take the lock, to widen race windows in tests.
    pub fn set_write_delay_ms(&self, ms: u64) {
        self.write_delay_ms.store(ms, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Unavailable("Store offline".into()));
        }
        Ok(())
    }

    async fn delay_write(&self) {
        let ms = self.write_delay_ms.load(Ordering::SeqCst);
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}

fn sorted_attendance(mut records: Vec<AttendanceRecord>) -> Vec<AttendanceRecord> {
    records.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
    records
}

#[async_trait::async_trait]
impl StudentRepository for InMemoryStore {
    async fn insert(&self, student: Student) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        if tables.students.contains_key(&student.id) {
            return Err(StoreError::Conflict(format!(
                "student {} already exists",
                student.id
            )));
        }
        tables.students.insert(student.id.clone(), student);
        Ok(())
    }

    async fn update(&self, student: Student) -> Result<Option<Student>, StoreError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        match tables.students.get_mut(&student.id) {
            Some(current) => {
                *current = student.clone();
                Ok(Some(student))
            }
            None => Ok(None),
        }
    }

    async fn get(&self, id: &str) -> Result<Option<Student>, StoreError> {
        self.ensure_online()?;
        Ok(self.tables.read().await.students.get(id).cloned())
    }

    async fn list(&self, order: StudentOrder) -> Result<Vec<Student>, StoreError> {
        self.ensure_online()?;
        let mut students: Vec<Student> =
            self.tables.read().await.students.values().cloned().collect();
        match order {
            StudentOrder::NewestFirst => students.sort_by(|a, b| {
                b.created_at
                    .cmp(&a.created_at)
                    .then_with(|| b.id.cmp(&a.id))
            }),
            StudentOrder::NameAscending => students.sort_by(|a, b| {
                a.name
                    .to_lowercase()
                    .cmp(&b.name.to_lowercase())
                    .then_with(|| a.id.cmp(&b.id))
            }),
        }
        Ok(students)
    }

    async fn delete_cascading(&self, id: &str) -> Result<Option<usize>, StoreError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        if tables.students.remove(id).is_none() {
            return Ok(None);
        }
        Ok(Some(tables.remove_attendance_where(|r| r.student_id == id)))
    }
}

#[async_trait::async_trait]
impl EventRepository for InMemoryStore {
    async fn insert(&self, event: Event) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        if tables.events.contains_key(&event.id) {
            return Err(StoreError::Conflict(format!(
                "event {} already exists",
                event.id
            )));
        }
        tables.events.insert(event.id.clone(), event);
        Ok(())
    }

    async fn update(&self, event: Event) -> Result<Option<Event>, StoreError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        match tables.events.get_mut(&event.id) {
            Some(current) => {
                *current = event.clone();
                Ok(Some(event))
            }
            None => Ok(None),
        }
    }

    async fn get(&self, id: &str) -> Result<Option<Event>, StoreError> {
        self.ensure_online()?;
        Ok(self.tables.read().await.events.get(id).cloned())
    }

    async fn list(&self, limit: Option<usize>) -> Result<Vec<Event>, StoreError> {
        self.ensure_online()?;
        let mut events: Vec<Event> = self.tables.read().await.events.values().cloned().collect();
        events.sort_by(|a, b| {
            b.start_date
                .cmp(&a.start_date)
                .then_with(|| b.id.cmp(&a.id))
        });
        if let Some(limit) = limit {
            events.truncate(limit);
        }
        Ok(events)
    }

    async fn delete_cascading(&self, id: &str) -> Result<Option<usize>, StoreError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        if tables.events.remove(id).is_none() {
            return Ok(None);
        }
        Ok(Some(tables.remove_attendance_where(|r| r.event_id == id)))
    }
}

#[async_trait::async_trait]
impl AttendanceRepository for InMemoryStore {
    async fn find_by_pair(
        &self,
        student_id: &str,
        event_id: &str,
    ) -> Result<Option<AttendanceRecord>, StoreError> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        Ok(tables
            .pairs
            .get(&(student_id.to_string(), event_id.to_string()))
            .and_then(|id| tables.attendance.get(id))
            .cloned())
    }

    async fn get(&self, id: &str) -> Result<Option<AttendanceRecord>, StoreError> {
        self.ensure_online()?;
        Ok(self.tables.read().await.attendance.get(id).cloned())
    }

    async fn insert_if_absent(
        &self,
        record: AttendanceRecord,
    ) -> Result<InsertOutcome, StoreError> {
        self.ensure_online()?;
        self.delay_write().await;
        let mut tables = self.tables.write().await;
        let key = (record.student_id.clone(), record.event_id.clone());
        if let Some(existing) = tables.pairs.get(&key).and_then(|id| tables.attendance.get(id)) {
            return Ok(InsertOutcome::Existing(existing.clone()));
        }
        if !tables.students.contains_key(&record.student_id) {
            return Err(StoreError::Conflict(format!(
                "student {} does not exist",
                record.student_id
            )));
        }
        if !tables.events.contains_key(&record.event_id) {
            return Err(StoreError::Conflict(format!(
                "event {} does not exist",
                record.event_id
            )));
        }
        if tables.attendance.contains_key(&record.id) {
            return Err(StoreError::Conflict(format!(
                "attendance {} already exists",
                record.id
            )));
        }
        tables.pairs.insert(key, record.id.clone());
        tables.attendance.insert(record.id.clone(), record.clone());
        Ok(InsertOutcome::Inserted(record))
    }

    async fn compare_and_swap(
        &self,
        expected: &AttendanceRecord,
        next: AttendanceRecord,
    ) -> Result<SwapOutcome, StoreError> {
        self.ensure_online()?;
        if next.id != expected.id
            || next.student_id != expected.student_id
            || next.event_id != expected.event_id
        {
            return Err(StoreError::Conflict(format!(
                "attendance {} cannot change identity",
                expected.id
            )));
        }
        self.delay_write().await;
        let mut tables = self.tables.write().await;
        match tables.attendance.get_mut(&expected.id) {
            None => Ok(SwapOutcome::Stale(None)),
            Some(current) if current != expected => Ok(SwapOutcome::Stale(Some(current.clone()))),
            Some(current) => {
                *current = next.clone();
                Ok(SwapOutcome::Swapped(next))
            }
        }
    }

    async fn set_status(
        &self,
        id: &str,
        status: AttendanceStatus,
        updated_at: EpochMillis,
    ) -> Result<Option<AttendanceRecord>, StoreError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        Ok(tables.attendance.get_mut(id).map(|record| {
            record.status = status;
            record.updated_at = updated_at;
            record.clone()
        }))
    }

    async fn list_by_event(&self, event_id: &str) -> Result<Vec<AttendanceRecord>, StoreError> {
        self.ensure_online()?;
        let records = self
            .tables
            .read()
            .await
            .attendance
            .values()
            .filter(|r| r.event_id == event_id)
            .cloned()
            .collect();
        Ok(sorted_attendance(records))
    }

    async fn list_all(&self) -> Result<Vec<AttendanceRecord>, StoreError> {
        self.ensure_online()?;
        let records = self.tables.read().await.attendance.values().cloned().collect();
        Ok(sorted_attendance(records))
    }
}
