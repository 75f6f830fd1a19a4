//! Missing-value detection for configuration grids

use serde::Serialize;

use crate::format::{FormatMode, ValueFormatter};
use crate::models::{ResourceAmount, ResourceConfig, ResourceKey, ResourceKind};

/// Per-cell missing flags for one block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WarningPair {
    pub cpu: bool,
    pub memory: bool,
}

/// Per-cell missing flags for a whole configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WarningMask {
    pub limits: WarningPair,
    pub requests: WarningPair,
}

impl WarningMask {
    pub fn get(&self, key: ResourceKey, kind: ResourceKind) -> bool {
        let pair = match key {
            ResourceKey::Limits => &self.limits,
            ResourceKey::Requests => &self.requests,
        };
        match kind {
            ResourceKind::Cpu => pair.cpu,
            ResourceKind::Memory => pair.memory,
        }
    }

    pub fn any(&self) -> bool {
        self.limits.cpu || self.limits.memory || self.requests.cpu || self.requests.memory
    }

    /// `(key, kind)` of every missing cell, in document order
    pub fn missing_cells(&self) -> Vec<(ResourceKey, ResourceKind)> {
        ResourceKey::ALL
            .into_iter()
            .flat_map(|key| ResourceKind::ALL.into_iter().map(move |kind| (key, kind)))
            .filter(|(key, kind)| self.get(*key, *kind))
            .collect()
    }
}

/// Whether a cell renders as blank
pub fn is_missing(formatter: &ValueFormatter, cell: &ResourceAmount) -> bool {
    formatter.format(cell, FormatMode::Raw).trim().is_empty()
}

pub fn warning_mask(formatter: &ValueFormatter, config: &ResourceConfig) -> WarningMask {
    let pair = |key| WarningPair {
        cpu: is_missing(formatter, config.cell(key, ResourceKind::Cpu)),
        memory: is_missing(formatter, config.cell(key, ResourceKind::Memory)),
    };

    WarningMask {
        limits: pair(ResourceKey::Limits),
        requests: pair(ResourceKey::Requests),
    }
}

/// True when any of the four cells is missing
pub fn has_missing(formatter: &ValueFormatter, config: &ResourceConfig) -> bool {
    warning_mask(formatter, config).any()
}
