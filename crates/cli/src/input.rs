//! Loading recommendation reports from disk

use anyhow::{Context, Result};
use breakdown_lib::{RecommendationItem, RecommendationReport, StructuredLogger};
use std::path::Path;

/// Read a report (or a single report item) from a JSON file
pub fn load_report(path: &Path) -> Result<RecommendationReport> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let report = RecommendationReport::from_json(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    StructuredLogger::new(&path.display().to_string()).log_report_loaded(report.data.len());
    Ok(report)
}

/// Pick an item by ID, or the first item when no ID is given
pub fn select_item<'a>(
    report: &'a RecommendationReport,
    id: Option<&str>,
) -> Result<&'a RecommendationItem> {
    match id {
        Some(id) => report
            .find(id)
            .with_context(|| format!("No recommendation with ID {}", id)),
        None => report
            .data
            .first()
            .context("Report contains no recommendations"),
    }
}
