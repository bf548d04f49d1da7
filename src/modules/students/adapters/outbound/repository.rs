use crate::modules::students::core::student::Student;
use crate::shared::infrastructure::store::StoreError;
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudentOrder {
    /// Most recently created first.
    #[default]
    NewestFirst,
    /// Alphabetical by name, for printed QR sheets.
    NameAscending,
}

#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn insert(&self, student: Student) -> Result<(), StoreError>;

    /// Replaces the stored student. Returns `None` when the id is unknown.
    async fn update(&self, student: Student) -> Result<Option<Student>, StoreError>;

    async fn get(&self, id: &str) -> Result<Option<Student>, StoreError>;

    async fn list(&self, order: StudentOrder) -> Result<Vec<Student>, StoreError>;

    /// Deletes the student together with its attendance rows, atomically.
    /// Returns the number of attendance rows removed, or `None` when the id is unknown.
    async fn delete_cascading(&self, id: &str) -> Result<Option<usize>, StoreError>;
}
