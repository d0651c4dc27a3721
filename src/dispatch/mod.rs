//! Single-period merit-order dispatch pipeline.
//!
//! The pipeline runs in a fixed order over one request-local
//! [`AllocationPlan`](crate::domain::AllocationPlan):
//! cost ranking, zero-cost (wind) dispatch, merit-order thermal fill,
//! and a final load-balancing pass.

pub mod balance;
pub mod cost;
pub mod merit;
pub mod planner;
pub mod wind;

pub use balance::*;
pub use cost::*;
pub use merit::*;
pub use planner::*;
pub use wind::*;

/// Rounds an output value to one decimal place, the resolution of the
/// response format.
pub fn round_mw(mw: f64) -> f64 {
    (mw * 10.0).round() / 10.0
}
