use chrono::Local;
use colored::Colorize;
use serde::{Deserialize, Serialize};

/// One recorded outcome. Immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestResult {
    pub name: String,
    pub passed: bool,
    pub message: String,
    pub timestamp: String,
}

/// Mutable state for a single suite run: the bearer token captured by the
/// login step and the append-only outcome log with its counters.
#[derive(Debug, Default)]
pub struct SuiteState {
    pub token: Option<String>,
    results: Vec<TestResult>,
    passed: u32,
    failed: u32,
}

impl SuiteState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an outcome and print its one-line status.
    ///
    /// Invariant: `passed + failed == results.len()` holds after every call.
    pub fn record(&mut self, name: &str, passed: bool, message: &str) {
        let status = if passed {
            "✅ PASS".green().bold()
        } else {
            "❌ FAIL".red().bold()
        };
        println!("{} - {}", status, name);
        if !message.is_empty() {
            println!("    {}", message.dimmed());
        }

        self.results.push(TestResult {
            name: name.to_string(),
            passed,
            message: message.to_string(),
            timestamp: Local::now().to_rfc3339(),
        });

        if passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    pub fn passed_count(&self) -> u32 {
        self.passed
    }

    pub fn failed_count(&self) -> u32 {
        self.failed
    }

    pub fn total(&self) -> u32 {
        self.passed + self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
