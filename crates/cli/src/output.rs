//! Output formatting utilities

use breakdown_lib::{ResourceKey, ResourceKind, Variation, WarningMask};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

/// Marker printed beside a missing value
pub const WARNING_MARKER: &str = "⚠";

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

/// Print a table from a list of items
pub fn print_table<T: Tabled + Serialize>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("{}", "No items found".yellow());
                return;
            }
            let table = Table::new(items).with(Style::rounded()).to_string();
            println!("{}", table);
        }
        OutputFormat::Json => print_json(&items),
    }
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => print_error(&format!("Failed to serialize output: {}", e)),
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", WARNING_MARKER.yellow().bold(), message);
}

/// Print a section heading
pub fn print_heading(message: &str) {
    println!("{}", message.bold());
}

/// Color a change: increases yellow, decreases green
pub fn color_change(variation: &Variation) -> String {
    if variation.is_empty() {
        return String::new();
    }
    if variation.percent > 0.0 {
        variation.text.yellow().to_string()
    } else if variation.percent < 0.0 {
        variation.text.green().to_string()
    } else {
        variation.text.clone()
    }
}

/// Prefix each value line of a YAML document with a warning gutter
///
/// Lines whose cell is missing get [`WARNING_MARKER`]; every other line gets
/// blank padding so the document stays aligned.
pub fn with_warning_gutter(document: &str, mask: &WarningMask) -> String {
    let mut key = None;
    let mut out = String::with_capacity(document.len() * 2);

    for line in document.lines() {
        let trimmed = line.trim_start();
        let name = trimmed.split(':').next().unwrap_or_default();
        let is_nested = line.len() != trimmed.len();

        let missing = if is_nested {
            let kind = match name {
                "cpu" => Some(ResourceKind::Cpu),
                "memory" => Some(ResourceKind::Memory),
                _ => None,
            };
            matches!((key, kind), (Some(key), Some(kind)) if mask.get(key, kind))
        } else {
            key = match name {
                "limits" => Some(ResourceKey::Limits),
                "requests" => Some(ResourceKey::Requests),
                _ => None,
            };
            false
        };

        let gutter = if missing {
            WARNING_MARKER.yellow().bold().to_string()
        } else {
            " ".to_string()
        };
        out.push_str(&gutter);
        out.push(' ');
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Truncate ID for display
pub fn truncate_id(id: &str) -> String {
    match id.char_indices().nth(8) {
        Some((idx, _)) => format!("{}...", &id[..idx]),
        None => id.to_string(),
    }
}

/// Format a timestamp as time elapsed before `now`, e.g. `3 hours ago`
pub fn format_age(ts: &str, now: DateTime<Utc>) -> String {
    // Unparseable timestamps are shown as-is
    let Ok(then) = DateTime::parse_from_rfc3339(ts) else {
        return ts.to_string();
    };

    let elapsed = now.signed_duration_since(then.with_timezone(&Utc));
    let (count, unit) = if elapsed.num_days() > 0 {
        (elapsed.num_days(), "day")
    } else if elapsed.num_hours() > 0 {
        (elapsed.num_hours(), "hour")
    } else if elapsed.num_minutes() > 0 {
        (elapsed.num_minutes(), "minute")
    } else {
        return "just now".to_string();
    };

    let plural = if count == 1 { "" } else { "s" };
    format!("{} {}{} ago", count, unit, plural)
}

/// Table cell for a row with missing values
pub fn missing_marker(has_missing: &bool) -> String {
    if *has_missing {
        WARNING_MARKER.to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_id() {
        assert_eq!(truncate_id("3a1c2f9e-5b7d"), "3a1c2f9e...");
        assert_eq!(truncate_id("short"), "short");
        assert_eq!(truncate_id("12345678"), "12345678");
    }

    #[test]
    fn test_format_age() {
        let now = DateTime::parse_from_rfc3339("2024-05-16T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_age("2024-05-14T09:30:00Z", now), "2 days ago");
        assert_eq!(format_age("2024-05-15T09:30:00Z", now), "1 day ago");
        assert_eq!(format_age("2024-05-16T07:00:00+00:00", now), "3 hours ago");
        assert_eq!(format_age("2024-05-16T09:59:00Z", now), "1 minute ago");
        assert_eq!(format_age("2024-05-16T10:00:30Z", now), "just now");
        assert_eq!(format_age("yesterday", now), "yesterday");
    }

    #[test]
    fn test_missing_marker() {
        assert_eq!(missing_marker(&true), WARNING_MARKER);
        assert_eq!(missing_marker(&false), "");
    }

    #[test]
    fn test_color_change_empty() {
        assert_eq!(color_change(&Variation::none()), "");
    }

    #[test]
    fn test_warning_gutter_marks_missing_cells() {
        colored::control::set_override(false);

        let mut mask = WarningMask::default();
        mask.requests.memory = true;
        let document = "limits:\n  cpu: 1\n  memory: 1Gi\nrequests:\n  cpu: 100m\n  memory: \n";

        let lines: Vec<String> = with_warning_gutter(document, &mask)
            .lines()
            .map(str::to_string)
            .collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "  limits:");
        assert_eq!(lines[2], "    memory: 1Gi");
        assert!(lines[5].starts_with(WARNING_MARKER));
        assert!(!lines[4].starts_with(WARNING_MARKER));
    }
}
