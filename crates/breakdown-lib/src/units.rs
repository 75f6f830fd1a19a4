//! Unit normalization for Kubernetes resource quantities
//!
//! CPU normalizes to millicores and memory to bytes. Unrecognized units map
//! to an identity multiplier rather than an error.

use crate::models::ResourceKind;

/// Millicores per core
pub const MILLICORES_PER_CORE: f64 = 1000.0;

/// CPU unit label for whole cores (usually omitted entirely)
pub const CORES_UNIT: &str = "cores";

/// CPU unit label for millicores as sent by the API
pub const MILLICORES_UNIT: &str = "millicores";

/// Binary-prefix memory units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryUnit {
    Ki,
    Mi,
    Gi,
    Ti,
    Pi,
    Ei,
}

impl MemoryUnit {
    pub const ALL: [MemoryUnit; 6] = [
        MemoryUnit::Ki,
        MemoryUnit::Mi,
        MemoryUnit::Gi,
        MemoryUnit::Ti,
        MemoryUnit::Pi,
        MemoryUnit::Ei,
    ];

    /// Parse a unit code, ignoring case
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.code().eq_ignore_ascii_case(code.trim()))
    }

    pub fn code(&self) -> &'static str {
        match self {
            MemoryUnit::Ki => "Ki",
            MemoryUnit::Mi => "Mi",
            MemoryUnit::Gi => "Gi",
            MemoryUnit::Ti => "Ti",
            MemoryUnit::Pi => "Pi",
            MemoryUnit::Ei => "Ei",
        }
    }

    /// Power of two exponent for this unit
    pub fn exponent(&self) -> i32 {
        match self {
            MemoryUnit::Ki => 10,
            MemoryUnit::Mi => 20,
            MemoryUnit::Gi => 30,
            MemoryUnit::Ti => 40,
            MemoryUnit::Pi => 50,
            MemoryUnit::Ei => 60,
        }
    }

    /// Bytes per unit
    pub fn multiplier(&self) -> f64 {
        2f64.powi(self.exponent())
    }
}

/// Multiplier from `unit` to millicores
pub fn cpu_multiplier(unit: Option<&str>) -> f64 {
    match unit {
        None => MILLICORES_PER_CORE,
        Some(unit) if unit == CORES_UNIT => MILLICORES_PER_CORE,
        Some(_) => 1.0,
    }
}

/// Multiplier from `unit` to bytes
pub fn memory_multiplier(unit: Option<&str>) -> f64 {
    unit.and_then(MemoryUnit::from_code)
        .map(|unit| unit.multiplier())
        .unwrap_or(1.0)
}

/// Multiplier from `unit` to the base unit of `kind`
pub fn multiplier(kind: ResourceKind, unit: Option<&str>) -> f64 {
    match kind {
        ResourceKind::Cpu => cpu_multiplier(unit),
        ResourceKind::Memory => memory_multiplier(unit),
    }
}

/// Convert an amount to millicores (CPU) or bytes (memory)
pub fn to_base(kind: ResourceKind, amount: f64, unit: Option<&str>) -> f64 {
    amount * multiplier(kind, unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_units_are_powers_of_two() {
        let expected = [
            ("Ki", 1_024.0),
            ("Mi", 1_048_576.0),
            ("Gi", 1_073_741_824.0),
            ("Ti", 1_099_511_627_776.0),
            ("Pi", 1_125_899_906_842_624.0),
            ("Ei", 1_152_921_504_606_846_976.0),
        ];
        for (code, bytes) in expected {
            assert_eq!(to_base(ResourceKind::Memory, 1.0, Some(code)), bytes, "{}", code);
        }
    }

    #[test]
    fn test_memory_units_case_insensitive() {
        assert_eq!(MemoryUnit::from_code("gi"), Some(MemoryUnit::Gi));
        assert_eq!(MemoryUnit::from_code("MI"), Some(MemoryUnit::Mi));
        assert_eq!(
            to_base(ResourceKind::Memory, 2.0, Some("ki")),
            to_base(ResourceKind::Memory, 2.0, Some("Ki"))
        );
    }

    #[test]
    fn test_unknown_memory_unit_is_identity() {
        assert_eq!(to_base(ResourceKind::Memory, 512.0, Some("bytes")), 512.0);
        assert_eq!(to_base(ResourceKind::Memory, 512.0, Some("")), 512.0);
        assert_eq!(to_base(ResourceKind::Memory, 512.0, None), 512.0);
    }

    #[test]
    fn test_cpu_cores_to_millicores() {
        assert_eq!(to_base(ResourceKind::Cpu, 1.0, None), 1000.0);
        assert_eq!(to_base(ResourceKind::Cpu, 1.0, Some("cores")), 1000.0);
        assert_eq!(to_base(ResourceKind::Cpu, 0.5, None), 500.0);
    }

    #[test]
    fn test_cpu_millicores_unchanged() {
        assert_eq!(to_base(ResourceKind::Cpu, 250.0, Some("m")), 250.0);
        assert_eq!(to_base(ResourceKind::Cpu, 250.0, Some("millicores")), 250.0);
    }
}
