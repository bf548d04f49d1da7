use serde::{Deserialize, Serialize};
use std::fmt;

/// How a scan was classified, as shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanOutcome {
    CheckedIn,
    CheckedOut,
    AlreadyCheckedIn,
    AlreadyCheckedOut,
    NotCheckedIn,
}

impl ScanOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanOutcome::CheckedIn => "checked-in",
            ScanOutcome::CheckedOut => "checked-out",
            ScanOutcome::AlreadyCheckedIn => "already-checked-in",
            ScanOutcome::AlreadyCheckedOut => "already-checked-out",
            ScanOutcome::NotCheckedIn => "not-checked-in",
        }
    }

    /// Whether the scan changed the attendance record.
    pub fn is_recorded(&self) -> bool {
        matches!(self, ScanOutcome::CheckedIn | ScanOutcome::CheckedOut)
    }
}

impl fmt::Display for ScanOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod scan_outcome_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ScanOutcome::CheckedIn)]
    #[case(ScanOutcome::CheckedOut)]
    #[case(ScanOutcome::AlreadyCheckedIn)]
    #[case(ScanOutcome::AlreadyCheckedOut)]
    #[case(ScanOutcome::NotCheckedIn)]
    fn it_should_serialise_as_its_wire_name(#[case] outcome: ScanOutcome) {
        let json = serde_json::to_value(outcome).unwrap();
        assert_eq!(json, serde_json::json!(outcome.as_str()));
    }

    #[rstest]
    fn it_should_only_count_mutating_outcomes_as_recorded() {
        assert!(ScanOutcome::CheckedIn.is_recorded());
        assert!(ScanOutcome::CheckedOut.is_recorded());
        assert!(!ScanOutcome::AlreadyCheckedIn.is_recorded());
        assert!(!ScanOutcome::AlreadyCheckedOut.is_recorded());
        assert!(!ScanOutcome::NotCheckedIn.is_recorded());
    }
}
