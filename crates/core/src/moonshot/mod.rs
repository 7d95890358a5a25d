//! Moonshot distribution: a fixed 75/25 split of a separate profit pool.

mod moonshot_calculator;
mod moonshot_model;

pub use moonshot_calculator::*;
pub use moonshot_model::*;
