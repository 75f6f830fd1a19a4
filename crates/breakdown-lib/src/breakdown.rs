//! Side-by-side breakdown of one recommendation record
//!
//! Bundles extraction, documents, variations and warnings for a single
//! interval/engine selection.

use serde::Serialize;

use crate::document::DocumentBuilder;
use crate::format::ValueFormatter;
use crate::extract::{current_config, recommended_config};
use crate::models::{Interval, OptimizationType, Recommendations, ResourceConfig};
use crate::settings::BreakdownSettings;
use crate::variation::{variation_grid, VariationGrid};
use crate::warnings::{warning_mask, WarningMask};

/// Breakdown of current vs recommended configuration
#[derive(Debug, Clone)]
pub struct Breakdown {
    interval: Interval,
    engine: OptimizationType,
    current: ResourceConfig,
    recommended: Option<ResourceConfig>,
    builder: DocumentBuilder,
}

/// Rendered state of one side of the breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SideView {
    pub document: String,
    pub has_missing: bool,
    pub warnings: WarningMask,
}

/// Serializable snapshot of a breakdown
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownView {
    pub interval: Interval,
    pub engine: OptimizationType,
    pub current: SideView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended: Option<SideView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variations: Option<VariationGrid>,
}

impl Breakdown {
    pub fn new(
        record: &Recommendations,
        interval: Interval,
        engine: OptimizationType,
        settings: BreakdownSettings,
    ) -> Self {
        Self {
            interval,
            engine,
            current: current_config(record),
            recommended: recommended_config(record, interval, engine),
            builder: DocumentBuilder::new(settings),
        }
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn engine(&self) -> OptimizationType {
        self.engine
    }

    pub fn current(&self) -> &ResourceConfig {
        &self.current
    }

    pub fn recommended(&self) -> Option<&ResourceConfig> {
        self.recommended.as_ref()
    }

    pub fn formatter(&self) -> &ValueFormatter {
        self.builder.formatter()
    }

    pub fn has_recommendation(&self) -> bool {
        self.recommended.is_some()
    }

    pub fn current_document(&self) -> String {
        self.builder.build_current(&self.current)
    }

    /// `None` when the record has no recommendation for this selection
    pub fn recommended_document(&self) -> Option<String> {
        self.recommended
            .as_ref()
            .map(|recommended| self.builder.build_recommended(&self.current, recommended))
    }

    pub fn current_warnings(&self) -> WarningMask {
        warning_mask(self.builder.formatter(), &self.current)
    }

    pub fn recommended_warnings(&self) -> Option<WarningMask> {
        self.recommended
            .as_ref()
            .map(|recommended| warning_mask(self.builder.formatter(), recommended))
    }

    pub fn variations(&self) -> Option<VariationGrid> {
        self.recommended
            .as_ref()
            .map(|recommended| variation_grid(self.builder.formatter(), &self.current, recommended))
    }

    pub fn view(&self) -> BreakdownView {
        let current_warnings = self.current_warnings();
        let recommended = self
            .recommended_document()
            .zip(self.recommended_warnings())
            .map(|(document, warnings)| SideView {
                document,
                has_missing: warnings.any(),
                warnings,
            });

        BreakdownView {
            interval: self.interval,
            engine: self.engine,
            current: SideView {
                document: self.current_document(),
                has_missing: current_warnings.any(),
                warnings: current_warnings,
            },
            recommended,
            variations: self.variations(),
        }
    }
}
