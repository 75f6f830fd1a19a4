//! Per-cell change table

use anyhow::Result;
use breakdown_lib::{
    Breakdown, BreakdownSettings, FormatMode, Interval, OptimizationType, Recommendations,
    ResourceKey, ResourceKind, StructuredLogger,
};
use serde::Serialize;
use std::path::Path;
use tabled::Tabled;

use crate::input::{load_report, select_item};
use crate::output::{color_change, print_table, print_warning, OutputFormat};

/// Row for variations table
#[derive(Debug, Tabled, Serialize)]
struct VariationRow {
    #[tabled(rename = "Resource")]
    resource: String,
    #[tabled(rename = "Current")]
    current: String,
    #[tabled(rename = "Recommended")]
    recommended: String,
    #[tabled(rename = "Change")]
    change: String,
    #[tabled(skip)]
    percent: f64,
}

/// Show the change from current to recommended for every cell
pub fn show_variations(
    path: &Path,
    id: Option<&str>,
    interval: Interval,
    engine: OptimizationType,
    settings: BreakdownSettings,
    format: OutputFormat,
) -> Result<()> {
    let report = load_report(path)?;
    let item = select_item(&report, id)?;

    let empty = Recommendations::default();
    let record = item.recommendations.as_ref().unwrap_or(&empty);
    let breakdown = Breakdown::new(record, interval, engine, settings);

    let (Some(recommended), Some(grid)) = (breakdown.recommended(), breakdown.variations()) else {
        StructuredLogger::new(&path.display().to_string()).log_recommendation_unavailable(
            &item.id,
            breakdown.interval(),
            breakdown.engine(),
        );
        print_warning(&format!(
            "No {} recommendation available for {}",
            breakdown.engine(),
            breakdown.interval()
        ));
        return Ok(());
    };

    let current = breakdown.current();
    let formatter = breakdown.formatter();

    let rows: Vec<VariationRow> = ResourceKey::ALL
        .into_iter()
        .flat_map(|key| ResourceKind::ALL.into_iter().map(move |kind| (key, kind)))
        .map(|(key, kind)| {
            let variation = grid.get(key, kind);
            VariationRow {
                resource: format!("{}.{}", key, kind),
                current: formatter.format(current.cell(key, kind), FormatMode::Formatted),
                recommended: formatter.format(recommended.cell(key, kind), FormatMode::Formatted),
                change: match format {
                    OutputFormat::Table => color_change(variation),
                    OutputFormat::Json => variation.text.clone(),
                },
                percent: variation.percent,
            }
        })
        .collect();

    print_table(&rows, format);
    Ok(())
}
