use crate::domain::{AllocationPlan, PlanRequest, UnitType};

use super::round_mw;

/// Dispatches the zero-cost units and seeds the allocation plan.
///
/// Wind output is forced by availability, not by demand: each wind unit
/// produces `pmax * wind% / 100` regardless of the load. Every other unit
/// gets a `0.0` placeholder so later stages find an entry for each unit.
///
/// Returns the plan and the demand left for the thermal fleet. The
/// remainder may be negative when wind alone exceeds the load; that case is
/// left to the balancing stage and the final tolerance check.
pub fn dispatch_wind(request: &PlanRequest) -> (AllocationPlan, f64) {
    let mut plan = AllocationPlan::new();
    let mut remaining_mw = request.load;

    for unit in &request.powerplants {
        if unit.kind == UnitType::Wind {
            let output = round_mw(unit.pmax_mw() * request.fuels.wind_fraction());
            plan.assign(&unit.name, output);
            remaining_mw -= output;
        } else {
            plan.assign(&unit.name, 0.0);
        }
    }

    (plan, remaining_mw)
}
