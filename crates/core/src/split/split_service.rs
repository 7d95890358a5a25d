use log::{debug, info};

use crate::allocation::allocate;
use crate::errors::Result;
use crate::fees::apply_fee_schedule;
use crate::metrics::calculate_trading_metrics;
use crate::moonshot::distribute_moonshot;

use super::{SplitReport, SplitRequest};

/// Trait for the split service.
pub trait SplitServiceTrait: Send + Sync {
    /// Runs weighting, allocation, fees and the moonshot split for a request
    /// and verifies every result.
    fn calculate(&self, request: &SplitRequest) -> Result<SplitReport>;
}

/// Stateless orchestration of the calculators.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitService;

impl SplitService {
    pub fn new() -> Self {
        Self
    }
}

impl SplitServiceTrait for SplitService {
    fn calculate(&self, request: &SplitRequest) -> Result<SplitReport> {
        let scenario = &request.scenario;
        scenario.validate()?;

        let evaluation_date = request.evaluation_date();
        let weighting = scenario.weighting(evaluation_date);
        weighting.weights.verify()?;
        if !weighting.skipped.is_empty() {
            info!(
                "Scenario '{}': {} contribution(s) skipped",
                scenario.name,
                weighting.skipped.len()
            );
        }

        let allocation = allocate(
            request.profit,
            request.carry_percent,
            &weighting.weights,
            &scenario.activity,
        );
        allocation.verify()?;

        let fees = match request.fee_schedule() {
            Some(schedule) => {
                let waterfall = apply_fee_schedule(&allocation, &schedule);
                waterfall.verify()?;
                Some(waterfall)
            }
            None => None,
        };

        let moonshot = match request.resolved_moonshot_pool() {
            Some(pool) => {
                let result = distribute_moonshot(pool, &weighting.weights, &scenario.activity);
                result.verify()?;
                Some(result)
            }
            None => None,
        };

        let metrics = request
            .trading
            .as_ref()
            .map(|summary| calculate_trading_metrics(summary, &weighting.weights));

        debug!(
            "Scenario '{}' on {}: profit {} split at {}% carry",
            scenario.name, evaluation_date, allocation.profit, allocation.carry_percent
        );

        Ok(SplitReport {
            scenario_name: scenario.name.clone(),
            evaluation_date,
            weighting,
            allocation,
            fees,
            moonshot,
            metrics,
        })
    }
}
