use crate::runner::state::{SuiteState, TestResult};
use chrono::Local;
use serde::{Deserialize, Serialize};

/// Aggregate counters of one run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub total: u32,
    pub passed: u32,
    pub failed: u32,
    pub success_rate: f64,
}

/// The persisted report artifact. Field names are the external contract
/// consumed by the CI dashboard, so they stay snake_case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    pub summary: Summary,
    pub tests: Vec<TestResult>,
    pub timestamp: String,
}

impl SummaryReport {
    /// Compute the report from the current state. Pure apart from the
    /// generation timestamp; repeated calls yield identical numbers.
    pub fn from_state(state: &SuiteState) -> Self {
        let total = state.total();
        let success_rate = if total > 0 {
            f64::from(state.passed_count()) / f64::from(total) * 100.0
        } else {
            0.0
        };

        Self {
            summary: Summary {
                total,
                passed: state.passed_count(),
                failed: state.failed_count(),
                success_rate,
            },
            tests: state.results().to_vec(),
            timestamp: Local::now().to_rfc3339(),
        }
    }

    pub fn failing_tests(&self) -> impl Iterator<Item = &TestResult> {
        self.tests.iter().filter(|t| !t.passed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_rate() {
        let mut state = SuiteState::new();
        state.record("a", true, "");
        state.record("b", true, "");
        state.record("c", false, "Status: 500");

        let report = SummaryReport::from_state(&state);
        assert_eq!(report.summary.total, 3);
        assert_eq!(report.summary.passed, 2);
        assert_eq!(report.summary.failed, 1);
        assert!((report.summary.success_rate - 66.666).abs() < 0.01);
        assert_eq!(report.failing_tests().count(), 1);
    }

    #[test]
    fn test_empty_run_has_zero_rate() {
        let state = SuiteState::new();
        let report = SummaryReport::from_state(&state);
        assert_eq!(report.summary.total, 0);
        assert_eq!(report.summary.success_rate, 0.0);
    }

    #[test]
    fn test_summary_numbers_idempotent() {
        let mut state = SuiteState::new();
        state.record("a", true, "");
        state.record("b", false, "");

        let first = SummaryReport::from_state(&state);
        let second = SummaryReport::from_state(&state);
        assert_eq!(first.summary, second.summary);
        assert_eq!(first.tests, second.tests);
    }

    #[test]
    fn test_artifact_field_names() {
        let mut state = SuiteState::new();
        state.record("Login", true, "token received");

        let report = SummaryReport::from_state(&state);
        let json = serde_json::to_value(&report).expect("serializes");
        assert!(json["summary"]["success_rate"].is_f64());
        assert_eq!(json["tests"][0]["name"], "Login");
        assert_eq!(json["tests"][0]["passed"], true);
        assert!(json["timestamp"].is_string());
    }
}
