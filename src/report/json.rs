use super::types::SummaryReport;
use anyhow::Result;
use std::path::Path;

/// Write the report artifact as pretty-printed JSON
pub fn write(report: &SummaryReport, output: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(output, json)?;
    println!("\n📄 Detailed report: {}", output.display());
    Ok(())
}
