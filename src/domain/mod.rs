pub mod fuels;
pub mod plan;
pub mod unit;

pub use fuels::*;
pub use plan::*;
pub use unit::*;
