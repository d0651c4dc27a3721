use ordered_float::OrderedFloat;

use crate::domain::{FuelPrices, GenerationUnit, UnitType};

/// Tons of CO2 emitted per MWh of gas-fired output, charged at the
/// carbon price.
const GAS_CO2_TON_PER_MWH: f64 = 0.3;

/// Marginal cost of running a unit, in euro per MWh.
///
/// `Unranked` covers unit types without a cost model; the derived `Ord`
/// places it after every finite cost, so such units sort to the end of the
/// merit order and are excluded from the greedy fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MarginalCost {
    Finite(OrderedFloat<f64>),
    Unranked,
}

impl MarginalCost {
    pub fn finite(euro_per_mwh: f64) -> Self {
        MarginalCost::Finite(OrderedFloat(euro_per_mwh))
    }

    pub fn euro_per_mwh(&self) -> Option<f64> {
        match self {
            MarginalCost::Finite(v) => Some(v.0),
            MarginalCost::Unranked => None,
        }
    }
}

/// A generation unit annotated with its marginal cost.
///
/// Ranking produces new records instead of mutating the request's units, so
/// concurrent computations can never observe each other's annotations.
#[derive(Debug, Clone)]
pub struct RankedUnit {
    pub unit: GenerationUnit,
    pub cost: MarginalCost,
}

/// Computes the marginal cost of one unit at current prices.
pub fn marginal_cost(unit: &GenerationUnit, fuels: &FuelPrices) -> MarginalCost {
    match unit.kind {
        UnitType::Wind => MarginalCost::finite(0.0),
        UnitType::Gas => {
            let fuel = fuels.gas_euro_per_mwh / unit.efficiency;
            let carbon = GAS_CO2_TON_PER_MWH * fuels.co2_euro_per_ton as f64;
            MarginalCost::finite(fuel + carbon)
        }
        UnitType::Turbojet => MarginalCost::finite(fuels.kerosine_euro_per_mwh / unit.efficiency),
        UnitType::Unknown => MarginalCost::Unranked,
    }
}

/// Builds the merit order: every unit annotated with its marginal cost,
/// sorted ascending. The sort is stable, so units with equal cost keep
/// their relative request order.
pub fn rank_units(units: &[GenerationUnit], fuels: &FuelPrices) -> Vec<RankedUnit> {
    let mut ranked: Vec<RankedUnit> = units
        .iter()
        .map(|unit| RankedUnit {
            unit: unit.clone(),
            cost: marginal_cost(unit, fuels),
        })
        .collect();
    ranked.sort_by(|a, b| a.cost.cmp(&b.cost));
    ranked
}
