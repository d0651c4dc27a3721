use tracing::{debug, warn};

use crate::domain::{PlanEntry, PlanRequest};

use super::{balance_load, dispatch_thermal, dispatch_wind, rank_units, round_mw};

/// Acceptable gap between requested load and total output before the plan
/// is flagged as mismatched.
pub const DEFAULT_TOLERANCE_MW: f64 = 0.1;

/// Runs the full dispatch pipeline for one request and assembles the
/// response in request order.
///
/// A residual gap above `tolerance_mw` is reported through a structured
/// warning but never fails the computation; the best-effort plan is always
/// returned. Untouched units (unknown types) report `0.0`.
pub fn plan_production(request: &PlanRequest, tolerance_mw: f64) -> Vec<PlanEntry> {
    let merit_order = rank_units(&request.powerplants, &request.fuels);

    let (mut plan, remaining_mw) = dispatch_wind(request);
    debug!(remaining_mw, "wind dispatched");

    let unmet_mw = dispatch_thermal(&merit_order, remaining_mw, &mut plan);
    debug!(unmet_mw, "thermal fleet dispatched");

    balance_load(&mut plan, &merit_order, request.load);

    let produced_mw = round_mw(plan.total_mw());
    if (produced_mw - request.load).abs() > tolerance_mw {
        warn!(
            load_mw = request.load,
            produced_mw,
            "production plan does not meet the requested load"
        );
    }

    request
        .powerplants
        .iter()
        .map(|unit| PlanEntry {
            name: unit.name.clone(),
            p: plan.assigned_mw(&unit.name),
        })
        .collect()
}
