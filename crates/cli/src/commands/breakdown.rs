//! Side-by-side configuration breakdown

use anyhow::Result;
use breakdown_lib::{
    Breakdown, BreakdownSettings, ConfigSide, Interval, OptimizationType, Recommendations,
    StructuredLogger,
};
use std::path::Path;

use crate::input::{load_report, select_item};
use crate::output::{print_heading, print_json, print_warning, with_warning_gutter, OutputFormat};

/// Show current and recommended configuration documents for one item
pub fn show_breakdown(
    path: &Path,
    id: Option<&str>,
    interval: Interval,
    engine: OptimizationType,
    settings: BreakdownSettings,
    format: OutputFormat,
) -> Result<()> {
    let report = load_report(path)?;
    let item = select_item(&report, id)?;
    let logger = StructuredLogger::new(&path.display().to_string());

    let empty = Recommendations::default();
    let record = item.recommendations.as_ref().unwrap_or(&empty);
    let breakdown = Breakdown::new(record, interval, engine, settings);

    let current_warnings = breakdown.current_warnings();
    let recommended_warnings = breakdown.recommended_warnings();

    logger.log_missing_values(&item.id, ConfigSide::Current, &current_warnings.missing_cells());
    match &recommended_warnings {
        Some(mask) => {
            logger.log_missing_values(&item.id, ConfigSide::Recommended, &mask.missing_cells())
        }
        None => logger.log_recommendation_unavailable(&item.id, interval, engine),
    }
    logger.log_breakdown_rendered(
        &item.id,
        interval,
        engine,
        current_warnings.any(),
        recommended_warnings.map(|mask| mask.any()),
    );

    match format {
        OutputFormat::Json => print_json(&breakdown.view()),
        OutputFormat::Table => {
            let container = item.container.as_deref().unwrap_or(&item.id);

            print_heading(&format!("Current configuration: {}", container));
            print!(
                "{}",
                with_warning_gutter(&breakdown.current_document(), &current_warnings)
            );
            println!();

            print_heading(&format!(
                "Recommended configuration: {} ({}, {})",
                container, interval, engine
            ));
            match breakdown.recommended_document().zip(recommended_warnings) {
                Some((document, mask)) => print!("{}", with_warning_gutter(&document, &mask)),
                None => print_warning(&format!(
                    "No {} recommendation available for {}",
                    engine, interval
                )),
            }

            if current_warnings.any() || recommended_warnings.is_some_and(|mask| mask.any()) {
                println!();
                print_warning("Some resource values are not set");
            }
        }
    }

    Ok(())
}
