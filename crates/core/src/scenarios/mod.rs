//! Scenario configuration records.

mod scenario_model;
mod scenario_presets;

pub use scenario_model::*;
pub use scenario_presets::*;
