//! Resource optimization breakdown library
//!
//! This crate provides the core functionality for:
//! - Extracting current and recommended configurations from recommendation records
//! - Normalizing CPU and memory units
//! - Computing per-cell percentage changes
//! - Rendering annotated YAML documents with aligned change comments
//! - Detecting missing values

pub mod breakdown;
pub mod document;
pub mod error;
pub mod extract;
pub mod format;
pub mod models;
pub mod observability;
pub mod settings;
pub mod units;
pub mod variation;
pub mod warnings;

pub use breakdown::{Breakdown, BreakdownView, SideView};
pub use document::DocumentBuilder;
pub use error::{BreakdownError, Result};
pub use format::{FormatMode, ValueFormatter};
pub use models::*;
pub use observability::StructuredLogger;
pub use settings::BreakdownSettings;
pub use variation::{Variation, VariationGrid};
pub use warnings::WarningMask;
