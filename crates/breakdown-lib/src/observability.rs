//! Structured logging for breakdown rendering
//!
//! Events carry an `event` field plus the record context so JSON log output
//! can be filtered without parsing messages.

use tracing::{debug, info, warn};

use crate::models::{ConfigSide, Interval, OptimizationType, ResourceKey, ResourceKind};

/// Structured logger bound to a source (file, report, etc.)
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    pub(crate) source: String,
}

impl StructuredLogger {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
        }
    }

    /// Log a report load
    pub fn log_report_loaded(&self, items: usize) {
        info!(
            event = "report_loaded",
            source = %self.source,
            items = items,
            "Loaded recommendations report"
        );
    }

    /// Log a rendered breakdown
    pub fn log_breakdown_rendered(
        &self,
        record_id: &str,
        interval: Interval,
        engine: OptimizationType,
        current_missing: bool,
        recommended_missing: Option<bool>,
    ) {
        info!(
            event = "breakdown_rendered",
            source = %self.source,
            record_id = %record_id,
            interval = %interval,
            engine = %engine,
            current_missing = current_missing,
            recommended_missing = ?recommended_missing,
            "Rendered configuration breakdown"
        );
    }

    /// Log a selection with no recommended configuration
    pub fn log_recommendation_unavailable(
        &self,
        record_id: &str,
        interval: Interval,
        engine: OptimizationType,
    ) {
        warn!(
            event = "recommendation_unavailable",
            source = %self.source,
            record_id = %record_id,
            interval = %interval,
            engine = %engine,
            "No recommendation for selected interval and engine"
        );
    }

    /// Log missing cells on one side
    pub fn log_missing_values(
        &self,
        record_id: &str,
        side: ConfigSide,
        cells: &[(ResourceKey, ResourceKind)],
    ) {
        if cells.is_empty() {
            return;
        }

        let cells: Vec<String> = cells
            .iter()
            .map(|(key, kind)| format!("{}.{}", key, kind))
            .collect();

        debug!(
            event = "missing_values_detected",
            source = %self.source,
            record_id = %record_id,
            side = ?side,
            cells = %cells.join(","),
            "Configuration has missing values"
        );
    }
}
