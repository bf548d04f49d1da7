use crate::modules::attendance::core::record::{AttendanceRecord, AttendanceStatus};
use serde::Serialize;

/// Status counts over a set of attendance rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AttendanceStats {
    pub total: usize,
    pub present: usize,
    pub late: usize,
    pub absent: usize,
    pub excused: usize,
}

impl AttendanceStats {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a AttendanceRecord>) -> Self {
        let mut stats = Self::default();
        for record in records {
            stats.add(record.status);
        }
        stats
    }

    pub fn add(&mut self, status: AttendanceStatus) {
        self.total += 1;
        match status {
            AttendanceStatus::Present => self.present += 1,
            AttendanceStatus::Late => self.late += 1,
            AttendanceStatus::Absent => self.absent += 1,
            AttendanceStatus::Excused => self.excused += 1,
        }
    }

    pub fn merge(&mut self, other: &AttendanceStats) {
        self.total += other.total;
        self.present += other.present;
        self.late += other.late;
        self.absent += other.absent;
        self.excused += other.excused;
    }

    /// Share of present rows, as a rounded percentage. Zero when empty.
    pub fn presence_rate(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.present as f64 / self.total as f64) * 100.0).round() as u32
    }
}
