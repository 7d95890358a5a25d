//! Capital-day weighting: turns dated capital contributions into ownership
//! weights for the three parties.

mod contribution_model;
mod weights_calculator;
mod weights_model;


pub use contribution_model::*;
pub use weights_calculator::*;
pub use weights_model::*;
