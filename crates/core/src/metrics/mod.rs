//! Trading summary ratios shown next to a split.

mod metrics_calculator;
mod metrics_model;

pub use metrics_calculator::*;
pub use metrics_model::*;
