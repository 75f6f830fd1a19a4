//! Configuration extraction from recommendation records

use tracing::debug;

use crate::models::{
    ConfigSide, Interval, OptimizationType, RecommendationValues, Recommendations, ResourceAmount,
    ResourceConfig, ResourceKey, ResourceKind, ResourcePair,
};

/// Extract the configuration grid for one side of a record
///
/// The current side always yields a grid. The recommended side yields `None`
/// unless both `term` and `engine` are given and resolve to a config.
pub fn extract(
    record: &Recommendations,
    side: ConfigSide,
    term: Option<Interval>,
    engine: Option<OptimizationType>,
) -> Option<ResourceConfig> {
    match side {
        ConfigSide::Current => Some(current_config(record)),
        ConfigSide::Recommended => recommended_config(record, term?, engine?),
    }
}

/// Current configuration; cells the record does not carry are unset
pub fn current_config(record: &Recommendations) -> ResourceConfig {
    from_values(record.current.as_ref())
}

/// Recommended configuration for a term and engine, if the record has one
pub fn recommended_config(
    record: &Recommendations,
    term: Interval,
    engine: OptimizationType,
) -> Option<ResourceConfig> {
    let values = record
        .recommendation_terms
        .as_ref()
        .and_then(|terms| terms.get(term))
        .and_then(|term| term.engine(engine))
        .and_then(|engine| engine.config.as_ref());

    if values.is_none() {
        debug!(term = %term, engine = %engine, "No recommended configuration");
    }

    values.map(|values| from_values(Some(values)))
}

/// Build a dense grid from sparse API values
pub fn from_values(values: Option<&RecommendationValues>) -> ResourceConfig {
    let pair = |key: ResourceKey| ResourcePair {
        cpu: resolve_cell(values, key, ResourceKind::Cpu),
        memory: resolve_cell(values, key, ResourceKind::Memory),
    };

    ResourceConfig {
        limits: pair(ResourceKey::Limits),
        requests: pair(ResourceKey::Requests),
    }
}

/// A cell is present only when the full path down to `amount` resolves
fn resolve_cell(
    values: Option<&RecommendationValues>,
    key: ResourceKey,
    kind: ResourceKind,
) -> ResourceAmount {
    let set = values.and_then(|values| match key {
        ResourceKey::Limits => values.limits.as_ref(),
        ResourceKey::Requests => values.requests.as_ref(),
    });
    let cell = set.and_then(|set| match kind {
        ResourceKind::Cpu => set.cpu.as_ref(),
        ResourceKind::Memory => set.memory.as_ref(),
    });

    match cell {
        Some(cell) if cell.amount.is_some() => cell.clone(),
        _ => ResourceAmount::unset(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        RecommendationEngine, RecommendationTerm, RecommendationTerms, ResourceSet,
    };
    use std::collections::BTreeMap;

    fn values(cpu: f64, memory: f64) -> RecommendationValues {
        let set = ResourceSet {
            cpu: Some(ResourceAmount::new(cpu, Some("millicores"))),
            memory: Some(ResourceAmount::new(memory, Some("Mi"))),
        };
        RecommendationValues {
            limits: Some(set.clone()),
            requests: Some(set),
        }
    }

    fn record() -> Recommendations {
        let mut engines = BTreeMap::new();
        engines.insert(
            "cost".to_string(),
            RecommendationEngine {
                config: Some(values(150.0, 256.0)),
                variation: None,
            },
        );
        Recommendations {
            current: Some(values(100.0, 512.0)),
            monitoring_end_time: None,
            recommendation_terms: Some(RecommendationTerms {
                short_term: Some(RecommendationTerm {
                    recommendation_engines: Some(engines),
                    ..Default::default()
                }),
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_extract_current() {
        let config = extract(&record(), ConfigSide::Current, None, None).unwrap();
        assert_eq!(config.limits.cpu.amount, Some(100.0));
        assert_eq!(config.requests.memory.unit.as_deref(), Some("Mi"));
    }

    #[test]
    fn test_extract_recommended() {
        let config = extract(
            &record(),
            ConfigSide::Recommended,
            Some(Interval::ShortTerm),
            Some(OptimizationType::Cost),
        )
        .unwrap();
        assert_eq!(config.limits.cpu.amount, Some(150.0));
        assert_eq!(config.requests.memory.amount, Some(256.0));
    }

    #[test]
    fn test_recommended_requires_term_and_engine() {
        let record = record();
        assert!(extract(&record, ConfigSide::Recommended, None, Some(OptimizationType::Cost)).is_none());
        assert!(extract(&record, ConfigSide::Recommended, Some(Interval::ShortTerm), None).is_none());
    }

    #[test]
    fn test_unresolved_recommendation_is_none() {
        let record = record();
        assert!(recommended_config(&record, Interval::LongTerm, OptimizationType::Cost).is_none());
        assert!(
            recommended_config(&record, Interval::ShortTerm, OptimizationType::Performance).is_none()
        );
        assert!(recommended_config(
            &Recommendations::default(),
            Interval::ShortTerm,
            OptimizationType::Cost
        )
        .is_none());
    }

    #[test]
    fn test_empty_config_is_distinct_from_absent() {
        let mut record = record();
        if let Some(terms) = record.recommendation_terms.as_mut() {
            if let Some(engines) = terms
                .short_term
                .as_mut()
                .and_then(|t| t.recommendation_engines.as_mut())
            {
                engines.insert(
                    "performance".to_string(),
                    RecommendationEngine {
                        config: Some(RecommendationValues::default()),
                        variation: None,
                    },
                );
            }
        }

        let config =
            recommended_config(&record, Interval::ShortTerm, OptimizationType::Performance);
        assert_eq!(config, Some(ResourceConfig::default()));
    }

    #[test]
    fn test_partial_paths_are_unset() {
        let values = RecommendationValues {
            limits: Some(ResourceSet {
                cpu: Some(ResourceAmount {
                    amount: None,
                    unit: Some("cores".to_string()),
                }),
                memory: None,
            }),
            requests: None,
        };
        let config = from_values(Some(&values));
        assert_eq!(config.limits.cpu, ResourceAmount::unset());
        assert_eq!(config.limits.memory, ResourceAmount::unset());
        assert_eq!(config.requests, ResourcePair::default());
    }

    #[test]
    fn test_missing_current_block_is_all_unset() {
        let config = current_config(&Recommendations::default());
        assert_eq!(config, ResourceConfig::default());
    }
}
