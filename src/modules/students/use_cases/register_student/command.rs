use crate::modules::students::core::student::StudentDetails;
use crate::shared::core::primitives::EpochMillis;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterStudent {
    pub id: String,
    /// Opaque marker stored alongside the student, assigned once.
    pub qr_code: String,
    pub details: StudentDetails,
    pub registered_at: EpochMillis,
}
