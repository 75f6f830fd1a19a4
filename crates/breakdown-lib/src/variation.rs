//! Percentage change between current and recommended values

use serde::Serialize;

use crate::format::ValueFormatter;
use crate::models::{ResourceAmount, ResourceConfig, ResourceKey, ResourceKind};
use crate::units;

/// Signed percentage change for one cell
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Variation {
    pub percent: f64,
    /// Rendered change, empty when there is nothing to compare
    pub text: String,
}

impl Variation {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Variations for all four cells of a configuration pair
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VariationGrid {
    pub limits: VariationPair,
    pub requests: VariationPair,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VariationPair {
    pub cpu: Variation,
    pub memory: Variation,
}

impl VariationGrid {
    pub fn get(&self, key: ResourceKey, kind: ResourceKind) -> &Variation {
        let pair = match key {
            ResourceKey::Limits => &self.limits,
            ResourceKey::Requests => &self.requests,
        };
        match kind {
            ResourceKind::Cpu => &pair.cpu,
            ResourceKind::Memory => &pair.memory,
        }
    }
}

/// Compute the change from `current` to `recommended`
///
/// Amounts are compared directly when both sides share a unit and through
/// their base unit otherwise. An empty unit matches an absent one, but
/// conversion uses the unit as sent, so `""` CPU stays at ×1. Unset cells
/// and a zero current value yield an empty variation.
pub fn variation(
    formatter: &ValueFormatter,
    kind: ResourceKind,
    current: &ResourceAmount,
    recommended: &ResourceAmount,
) -> Variation {
    let (Some(mut current_value), Some(mut recommended_value)) =
        (formatter.value(current), formatter.value(recommended))
    else {
        return Variation::none();
    };

    if formatter.units(current) != formatter.units(recommended) {
        current_value = units::to_base(kind, current_value, current.unit.as_deref());
        recommended_value = units::to_base(kind, recommended_value, recommended.unit.as_deref());
    }

    let Some(percent) = percentage(current_value, recommended_value) else {
        return Variation::none();
    };

    Variation {
        percent,
        text: formatter.format_percentage(percent),
    }
}

/// `(new - old) / old * 100`, or `None` when the result would not be finite
pub fn percentage(old: f64, new: f64) -> Option<f64> {
    if old == 0.0 {
        return None;
    }
    let percent = (new - old) / old * 100.0;
    percent.is_finite().then_some(percent)
}

/// Variations for every cell of a current/recommended pair
pub fn variation_grid(
    formatter: &ValueFormatter,
    current: &ResourceConfig,
    recommended: &ResourceConfig,
) -> VariationGrid {
    let cell = |key, kind| {
        variation(
            formatter,
            kind,
            current.cell(key, kind),
            recommended.cell(key, kind),
        )
    };

    VariationGrid {
        limits: VariationPair {
            cpu: cell(ResourceKey::Limits, ResourceKind::Cpu),
            memory: cell(ResourceKey::Limits, ResourceKind::Memory),
        },
        requests: VariationPair {
            cpu: cell(ResourceKey::Requests, ResourceKind::Cpu),
            memory: cell(ResourceKey::Requests, ResourceKind::Memory),
        },
    }
}
