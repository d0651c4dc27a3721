use crate::domain::{AllocationPlan, UnitType};

use super::{round_mw, RankedUnit};

/// Best-effort correction of the residual gap between total output and the
/// target load.
///
/// Walks the merit order in reverse (most expensive running unit first) and
/// tries to absorb the whole difference in a single unit. Wind units are
/// never adjusted, their output is fixed by availability. A candidate
/// adjustment is accepted only if the result stays inside `[pmin, pmax]` or
/// shuts the unit down to exactly `0`.
///
/// This is deliberately a single-unit heuristic, not a re-optimization: it
/// returns on the first exact match and otherwise leaves the best plan
/// found, which may still miss the load.
pub fn balance_load(plan: &mut AllocationPlan, merit_order: &[RankedUnit], load_mw: f64) {
    let difference = round_mw(load_mw - plan.total_mw());
    if difference == 0.0 {
        return;
    }

    for ranked in merit_order.iter().rev() {
        let unit = &ranked.unit;
        if unit.kind == UnitType::Wind {
            continue;
        }
        let current = plan.assigned_mw(&unit.name);
        if current <= 0.0 {
            continue;
        }

        let candidate = current + difference;
        let within_band = candidate >= unit.pmin_mw() && candidate <= unit.pmax_mw();
        if within_band || candidate == 0.0 {
            plan.assign(&unit.name, round_mw(candidate));
            if round_mw(plan.total_mw()) == load_mw {
                return;
            }
        }
    }
}
