use crate::domain::AllocationPlan;

use super::{round_mw, RankedUnit};

/// Greedy merit-order fill of the thermal fleet.
///
/// Walks the merit order from cheapest to most expensive, exhausting each
/// unit's capacity before touching the next. Non-thermal units are skipped:
/// wind was dispatched earlier, unranked units are never dispatched here.
///
/// A unit whose feasible output would fall strictly between `0` and its
/// `pmin` cannot run and keeps its zero allocation. The walk never
/// backtracks, so such a unit is not revisited even if a later assignment
/// would have made it feasible.
///
/// Returns the demand still unmet; insufficient thermal capacity is not an
/// error at this stage.
pub fn dispatch_thermal(
    merit_order: &[RankedUnit],
    mut remaining_mw: f64,
    plan: &mut AllocationPlan,
) -> f64 {
    for ranked in merit_order {
        if remaining_mw <= 0.0 {
            break;
        }
        if !ranked.unit.kind.is_thermal() {
            continue;
        }

        let unit = &ranked.unit;
        let candidate = remaining_mw.min(unit.pmax_mw());
        if candidate > 0.0 && candidate < unit.pmin_mw() {
            // Below the stable minimum: the unit stays off rather than
            // being forced up to pmin, which would overshoot the load.
            continue;
        }

        let assigned = round_mw(candidate);
        plan.assign(&unit.name, assigned);
        remaining_mw -= assigned;
    }

    remaining_mw
}
