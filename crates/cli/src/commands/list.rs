//! Recommendations report listing

use anyhow::Result;
use breakdown_lib::{
    extract::current_config, warnings::has_missing, BreakdownSettings, ValueFormatter,
};
use chrono::Utc;
use serde::Serialize;
use std::path::Path;
use tabled::Tabled;

use crate::input::load_report;
use crate::output::{format_age, missing_marker, print_table, truncate_id, OutputFormat};

/// Row for recommendations table
#[derive(Debug, Tabled, Serialize)]
struct RecommendationRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Container")]
    container: String,
    #[tabled(rename = "Project")]
    project: String,
    #[tabled(rename = "Workload")]
    workload: String,
    #[tabled(rename = "Workload type")]
    workload_type: String,
    #[tabled(rename = "Cluster")]
    cluster: String,
    #[tabled(rename = "Last reported")]
    last_reported: String,
    #[tabled(rename = "Missing values", display_with = "missing_marker")]
    has_missing: bool,
}

/// List every item of a report
pub fn list_recommendations(
    path: &Path,
    settings: BreakdownSettings,
    format: OutputFormat,
) -> Result<()> {
    let report = load_report(path)?;
    let formatter = ValueFormatter::new(settings);
    let now = Utc::now();

    let rows: Vec<RecommendationRow> = report
        .data
        .iter()
        .map(|item| {
            let current = item
                .recommendations
                .as_ref()
                .map(current_config)
                .unwrap_or_default();
            let last_reported = item.last_reported.as_deref().unwrap_or_default();

            RecommendationRow {
                id: match format {
                    OutputFormat::Table => truncate_id(&item.id),
                    OutputFormat::Json => item.id.clone(),
                },
                container: item.container.clone().unwrap_or_default(),
                project: item.project.clone().unwrap_or_default(),
                workload: item.workload.clone().unwrap_or_default(),
                workload_type: item.workload_type.clone().unwrap_or_default(),
                cluster: item.cluster_name().to_string(),
                last_reported: match format {
                    OutputFormat::Table if !last_reported.is_empty() => {
                        format_age(last_reported, now)
                    }
                    _ => last_reported.to_string(),
                },
                has_missing: has_missing(&formatter, &current),
            }
        })
        .collect();

    print_table(&rows, format);
    if let OutputFormat::Table = format {
        if !rows.is_empty() {
            println!("\nTotal: {} recommendations", rows.len());
        }
    }
    Ok(())
}
