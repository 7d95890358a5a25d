//! Carrysplit Core - profit allocation for a Founders + two investor pool.
//!
//! The calculators are pure functions over immutable inputs:
//! capital-day weighting, the carry-based profit allocation, the sequential
//! fee waterfall and the fixed 75/25 moonshot split. Bad inputs are clamped
//! or defaulted; only invariant violations surface as errors.

pub mod allocation;
pub mod constants;
pub mod errors;
pub mod export;
pub mod fees;
pub mod metrics;
pub mod moonshot;
pub mod parties;
pub mod scenarios;
pub mod split;
pub mod utils;
pub mod weights;

pub use allocation::{allocate, AllocationInput, AllocationResult, PartyAllocation};
pub use moonshot::{distribute_moonshot, MoonshotResult};
pub use parties::{InvestorActivity, Party, PartyMap};
pub use weights::{compute_weights, CapitalDayWeights, WeightingResult};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
