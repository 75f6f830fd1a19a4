//! Core data models for resource optimization breakdowns
//!
//! The wire types mirror the recommendations API payload, where every level
//! of nesting is optional. The extracted [`ResourceConfig`] is the dense grid
//! the rest of the crate works on.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BreakdownError;

/// Compute resource dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Cpu,
    Memory,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 2] = [ResourceKind::Cpu, ResourceKind::Memory];

    /// Key used in the rendered document
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Cpu => "cpu",
            ResourceKind::Memory => "memory",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kubernetes resource block: limits or requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKey {
    Limits,
    Requests,
}

impl ResourceKey {
    pub const ALL: [ResourceKey; 2] = [ResourceKey::Limits, ResourceKey::Requests];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKey::Limits => "limits",
            ResourceKey::Requests => "requests",
        }
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which side of the comparison a configuration belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigSide {
    Current,
    Recommended,
}

/// Recommendation time horizon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interval {
    #[default]
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::ShortTerm => "short_term",
            Interval::MediumTerm => "medium_term",
            Interval::LongTerm => "long_term",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = BreakdownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "short_term" | "short" => Ok(Interval::ShortTerm),
            "medium_term" | "medium" => Ok(Interval::MediumTerm),
            "long_term" | "long" => Ok(Interval::LongTerm),
            _ => Err(BreakdownError::UnknownInterval(s.to_string())),
        }
    }
}

/// Recommendation engine identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationType {
    #[default]
    Cost,
    Performance,
}

impl OptimizationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptimizationType::Cost => "cost",
            OptimizationType::Performance => "performance",
        }
    }
}

impl fmt::Display for OptimizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptimizationType {
    type Err = BreakdownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cost" => Ok(OptimizationType::Cost),
            "performance" => Ok(OptimizationType::Performance),
            _ => Err(BreakdownError::UnknownEngine(s.to_string())),
        }
    }
}

/// One measured quantity, e.g. a CPU limit
///
/// `unit` is `None` for whole cores on CPU. The API calls it `format`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceAmount {
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default, rename = "format")]
    pub unit: Option<String>,
}

impl ResourceAmount {
    pub fn new(amount: f64, unit: Option<&str>) -> Self {
        Self {
            amount: Some(amount),
            unit: unit.map(str::to_string),
        }
    }

    /// A cell with neither amount nor unit
    pub fn unset() -> Self {
        Self::default()
    }
}

/// CPU and memory amounts for one resource block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourcePair {
    pub cpu: ResourceAmount,
    pub memory: ResourceAmount,
}

impl ResourcePair {
    pub fn get(&self, kind: ResourceKind) -> &ResourceAmount {
        match kind {
            ResourceKind::Cpu => &self.cpu,
            ResourceKind::Memory => &self.memory,
        }
    }
}

/// Dense limits/requests x cpu/memory grid
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceConfig {
    pub limits: ResourcePair,
    pub requests: ResourcePair,
}

impl ResourceConfig {
    pub fn block(&self, key: ResourceKey) -> &ResourcePair {
        match key {
            ResourceKey::Limits => &self.limits,
            ResourceKey::Requests => &self.requests,
        }
    }

    pub fn cell(&self, key: ResourceKey, kind: ResourceKind) -> &ResourceAmount {
        self.block(key).get(kind)
    }
}

// API payload types

/// Sparse `cpu`/`memory` block as sent by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<ResourceAmount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<ResourceAmount>,
}

/// Sparse limits/requests values as sent by the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationValues {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limits: Option<ResourceSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requests: Option<ResourceSet>,
}

/// Output of one recommendation engine for a term
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationEngine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<RecommendationValues>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variation: Option<RecommendationValues>,
}

/// Recommendations computed over one time horizon
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationTerm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_in_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitoring_start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation_engines: Option<BTreeMap<String, RecommendationEngine>>,
}

impl RecommendationTerm {
    pub fn engine(&self, engine: OptimizationType) -> Option<&RecommendationEngine> {
        self.recommendation_engines.as_ref()?.get(engine.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationTerms {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_term: Option<RecommendationTerm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium_term: Option<RecommendationTerm>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_term: Option<RecommendationTerm>,
}

impl RecommendationTerms {
    pub fn get(&self, interval: Interval) -> Option<&RecommendationTerm> {
        match interval {
            Interval::ShortTerm => self.short_term.as_ref(),
            Interval::MediumTerm => self.medium_term.as_ref(),
            Interval::LongTerm => self.long_term.as_ref(),
        }
    }
}

/// Current configuration plus recommendations per term
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<RecommendationValues>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitoring_end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation_terms: Option<RecommendationTerms>,
}

/// One container row of a recommendations report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationItem {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workload: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workload_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reported: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<Recommendations>,
}

impl RecommendationItem {
    /// Cluster alias, falling back to the cluster UUID
    pub fn cluster_name(&self) -> &str {
        self.cluster_alias
            .as_deref()
            .or(self.cluster_uuid.as_deref())
            .unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportMeta {
    #[serde(default)]
    pub count: u64,
}

/// Paged recommendations report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationReport {
    #[serde(default)]
    pub data: Vec<RecommendationItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ReportMeta>,
}

impl RecommendationReport {
    /// Decode either a full report or a single report item
    pub fn from_json(json: &str) -> Result<Self, BreakdownError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if value.get("data").is_some() {
            return Ok(serde_json::from_value(value)?);
        }

        let item: RecommendationItem = serde_json::from_value(value)?;
        Ok(Self {
            data: vec![item],
            meta: Some(ReportMeta { count: 1 }),
        })
    }

    pub fn find(&self, id: &str) -> Option<&RecommendationItem> {
        self.data.iter().find(|item| item.id == id)
    }
}
