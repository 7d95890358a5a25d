//! The three fixed parties of the pool and per-party containers.

mod party_model;

pub use party_model::*;
