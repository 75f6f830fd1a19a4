//! Display formatting for resource values and percentage changes

use crate::models::ResourceAmount;
use crate::settings::BreakdownSettings;
use crate::units::{CORES_UNIT, MILLICORES_UNIT};

/// How a cell should be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMode {
    /// Amount plus unit, e.g. `256Mi`
    Formatted,
    /// Unconverted amount, e.g. `256`
    Raw,
    /// Unit only, e.g. `Mi`
    UnitsOnly,
}

/// Formats resource cells according to [`BreakdownSettings`]
#[derive(Debug, Clone, Default)]
pub struct ValueFormatter {
    settings: BreakdownSettings,
}

impl ValueFormatter {
    pub fn new(settings: BreakdownSettings) -> Self {
        Self { settings }
    }

    /// Amount of a cell, or `None` when the cell counts as not set
    pub fn value(&self, cell: &ResourceAmount) -> Option<f64> {
        let amount = cell.amount.filter(|amount| amount.is_finite())?;
        if self.settings.zero_is_missing && amount == 0.0 {
            return None;
        }
        Some(amount)
    }

    /// Unit of a set cell; empty units are treated as absent
    pub fn units<'a>(&self, cell: &'a ResourceAmount) -> Option<&'a str> {
        self.value(cell)?;
        cell.unit.as_deref().filter(|unit| !unit.is_empty())
    }

    /// Render a cell; unset cells render as an empty string in every mode
    pub fn format(&self, cell: &ResourceAmount, mode: FormatMode) -> String {
        let Some(value) = self.value(cell) else {
            return String::new();
        };

        match mode {
            FormatMode::Formatted => format!(
                "{}{}",
                format_amount(value, self.settings.amount_precision),
                self.units(cell).map(unit_label).unwrap_or_default()
            ),
            FormatMode::Raw => value.to_string(),
            FormatMode::UnitsOnly => self.units(cell).unwrap_or_default().to_string(),
        }
    }

    /// Render a percentage change with the configured precision
    pub fn format_percentage(&self, percent: f64) -> String {
        format_percentage(percent, self.settings.percent_precision)
    }
}

/// Kubernetes notation for a unit code: `millicores` is `m`, cores are bare
pub fn unit_label(unit: &str) -> &str {
    match unit {
        MILLICORES_UNIT => "m",
        CORES_UNIT => "",
        _ => unit,
    }
}

/// Format an amount with at most `precision` fractional digits
pub fn format_amount(value: f64, precision: usize) -> String {
    let formatted = format!("{:.*}", precision, value);
    if !formatted.contains('.') {
        return formatted;
    }
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        _ => trimmed.to_string(),
    }
}

/// Format a signed percentage, e.g. `+50.0%` or `-12.5%`
///
/// Values that round to zero render unsigned.
pub fn format_percentage(percent: f64, precision: usize) -> String {
    let rounded = format!("{:.*}", precision, percent);
    let is_zero = rounded.parse::<f64>().map(|v| v == 0.0).unwrap_or(false);

    if is_zero {
        format!("{:.*}%", precision, 0.0)
    } else if percent > 0.0 {
        format!("+{}%", rounded)
    } else {
        format!("{}%", rounded)
    }
}
