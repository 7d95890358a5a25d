//! Profit allocation: the ordinary capital-weighted split with carry.

mod allocation_calculator;
mod allocation_model;

#[cfg(test)]
mod allocation_tests;

pub use allocation_calculator::*;
pub use allocation_model::*;
