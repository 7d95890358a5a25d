//! Carry and sequential fee calculations.

mod fee_waterfall;
mod fees_calculator;
mod fees_model;

pub use fee_waterfall::*;
pub use fees_calculator::*;
pub use fees_model::*;
