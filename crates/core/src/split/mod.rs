//! One full calculation pass over a scenario.

mod split_model;
mod split_service;


pub use split_model::*;
pub use split_service::*;
