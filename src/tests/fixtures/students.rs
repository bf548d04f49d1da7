use crate::modules::students::core::student::Student;
use crate::tests::fixtures::FIXED_NOW;
use serde::Deserialize;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct StudentDto {
    pub id: String,
    pub student_id: String,
    pub name: String,
    pub email: String,
}

pub fn fixed_student_dto() -> StudentDto {
    serde_json::from_str(include_str!("json/student.json")).expect("invalid student fixture")
}

pub struct StudentBuilder {
    inner: Student,
}

impl Default for StudentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentBuilder {
    pub fn new() -> Self {
        let dto = fixed_student_dto();
        Self {
            inner: Student {
                id: dto.id,
                student_id: dto.student_id,
                name: dto.name,
                email: dto.email,
                qr_code: Some("qr-fixed-0001".to_string()),
                created_at: FIXED_NOW,
                updated_at: FIXED_NOW,
            },
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn student_id(mut self, v: impl Into<String>) -> Self {
        self.inner.student_id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn created_at(mut self, v: i64) -> Self {
        self.inner.created_at = v;
        self.inner.updated_at = v;
        self
    }

    pub fn build(self) -> Student {
        self.inner
    }
}

#[cfg(test)]
mod student_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = StudentBuilder::default().build();
        assert_eq!(built.id, "0190f3a2-0000-7000-8000-00000000a001");
        assert_eq!(built.student_id, "2024001");
        assert_eq!(built.name, "Ada Lovelace");
        assert_eq!(built.email, "ada@example.com");
        assert_eq!(built.created_at, FIXED_NOW);
    }

    #[rstest]
    fn setters_override_fields() {
        let built = StudentBuilder::new()
            .id("s-9")
            .student_id("2024999")
            .name("Grace Hopper")
            .email("grace@example.com")
            .created_at(5)
            .build();
        assert_eq!(built.id, "s-9");
        assert_eq!(built.student_id, "2024999");
        assert_eq!(built.name, "Grace Hopper");
        assert_eq!(built.email, "grace@example.com");
        assert_eq!(built.updated_at, 5);
    }
}
