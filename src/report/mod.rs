pub mod json;
pub mod types;

use crate::runner::state::SuiteState;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use types::SummaryReport;

/// Compute the summary, print the console block, persist the JSON artifact,
/// and report whether the whole run passed.
pub fn emit(state: &SuiteState, output: &Path) -> Result<bool> {
    let report = SummaryReport::from_state(state);
    print_summary(&report);
    json::write(&report, output)
        .with_context(|| format!("failed to write report to {}", output.display()))?;
    Ok(state.all_passed())
}

/// Render a previously saved summary JSON without re-running anything
pub fn render_report_file(path: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read report {}", path.display()))?;
    let report: SummaryReport = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a summary report", path.display()))?;
    print_summary(&report);
    Ok(())
}

fn print_summary(report: &SummaryReport) {
    let line = "=".repeat(60);
    println!("\n{}", line);
    println!("📊 TEST SUMMARY");
    println!("{}", line);
    println!("Total tests: {}", report.summary.total);
    println!("✅ Passed:   {}", report.summary.passed.to_string().green());
    println!("❌ Failed:   {}", report.summary.failed.to_string().red());
    println!("📈 Success rate: {:.1}%", report.summary.success_rate);

    if report.summary.failed > 0 {
        println!("\n{}", "Failing tests:".red().bold());
        for test in report.failing_tests() {
            println!("  - {}: {}", test.name, test.message);
        }
    }
    println!("{}", line);
}
