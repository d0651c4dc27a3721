use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use validator::{Validate, ValidationError};

use super::{FuelPrices, GenerationUnit};

/// A single dispatch request: target load, current prices, and the unit
/// fleet. The order of `powerplants` is the order the response must use.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_unique_names"))]
pub struct PlanRequest {
    #[validate(range(min = 0.0))]
    pub load: f64,

    #[validate(nested)]
    pub fuels: FuelPrices,

    #[validate(nested)]
    pub powerplants: Vec<GenerationUnit>,
}

fn validate_unique_names(request: &PlanRequest) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for unit in &request.powerplants {
        if !seen.insert(unit.name.as_str()) {
            let mut err = ValidationError::new("duplicate_unit_name");
            err.message = Some(format!("duplicate unit name: {}", unit.name).into());
            return Err(err);
        }
    }
    Ok(())
}

/// One line of the response: a unit and its assigned output in MW,
/// rounded to one decimal place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub name: String,
    pub p: f64,
}

/// Mutable per-request allocation map built up by the dispatch pipeline.
///
/// Every unit of the request gets an entry (the zero-cost dispatcher seeds
/// placeholders), so lookups default to `0.0` only for callers asking about
/// units outside the request.
#[derive(Debug, Clone, Default)]
pub struct AllocationPlan {
    allocations: HashMap<String, f64>,
}

impl AllocationPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets (or overwrites) the assigned output for a unit.
    pub fn assign(&mut self, name: &str, mw: f64) {
        self.allocations.insert(name.to_string(), mw);
    }

    /// Assigned output for a unit, `0.0` if it was never touched.
    pub fn assigned_mw(&self, name: &str) -> f64 {
        self.allocations.get(name).copied().unwrap_or(0.0)
    }

    /// Sum of all assigned outputs.
    pub fn total_mw(&self) -> f64 {
        self.allocations.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UnitType;

    fn request_with_names(names: &[&str]) -> PlanRequest {
        PlanRequest {
            load: 100.0,
            fuels: FuelPrices {
                gas_euro_per_mwh: 13.4,
                kerosine_euro_per_mwh: 50.8,
                co2_euro_per_ton: 20,
                wind_percent: 60,
            },
            powerplants: names
                .iter()
                .map(|n| GenerationUnit {
                    name: n.to_string(),
                    kind: UnitType::Gas,
                    efficiency: 0.5,
                    pmin: 0,
                    pmax: 100,
                })
                .collect(),
        }
    }

    #[test]
    fn rejects_duplicate_unit_names() {
        assert!(request_with_names(&["a", "b", "a"]).validate().is_err());
        assert!(request_with_names(&["a", "b", "c"]).validate().is_ok());
    }

    #[test]
    fn rejects_negative_load() {
        let mut request = request_with_names(&["a"]);
        request.load = -1.0;
        assert!(request.validate().is_err());
    }

    #[test]
    fn nested_unit_validation_is_applied() {
        let mut request = request_with_names(&["a"]);
        request.powerplants[0].efficiency = 0.0;
        assert!(request.validate().is_err());
    }

    #[test]
    fn allocation_plan_defaults_to_zero() {
        let mut plan = AllocationPlan::new();
        assert_eq!(plan.assigned_mw("missing"), 0.0);
        plan.assign("g1", 42.5);
        plan.assign("g2", 7.5);
        assert_eq!(plan.assigned_mw("g1"), 42.5);
        assert_eq!(plan.total_mw(), 50.0);
    }

    #[test]
    fn assign_overwrites_previous_value() {
        let mut plan = AllocationPlan::new();
        plan.assign("g1", 10.0);
        plan.assign("g1", 20.0);
        assert_eq!(plan.assigned_mw("g1"), 20.0);
        assert_eq!(plan.total_mw(), 20.0);
    }
}
